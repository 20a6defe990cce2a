use yew::prelude::*;

use crate::components::pricing_card::PricingCard;
use crate::components::reveal::{use_reveal_on_scroll, REVEAL_SELECTOR};
use crate::components::smooth_scroll::AnchorLink;
use crate::config;
use crate::contact::form::ContactForm;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_reveal_on_scroll(REVEAL_SELECTOR);

    html! {
        <main class="landing-page">
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    padding: 120px 2rem 4rem;
                    background: linear-gradient(135deg, #f4faf6 0%, #e3f2e9 100%);
                }
                .hero-content { max-width: 960px; margin: 0 auto; }
                .hero h1 { font-size: 3rem; color: #1f3d2e; margin-bottom: 1rem; }
                .hero p { font-size: 1.25rem; color: #4a4a4a; }
                .hero-cta-group { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
                section { padding: 5rem 2rem; }
                .section-inner { max-width: 1100px; margin: 0 auto; }
                .section-title { text-align: center; font-size: 2.25rem; color: #1f3d2e; margin-bottom: 3rem; }
                .mission-grid, .features-grid, .benefits-grid, .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                }
                .mission-item, .feature, .benefit-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.06);
                }
                .pricing-card {
                    position: relative;
                    z-index: 1;
                    background: #fff;
                    border: 1px solid #e0e0e0;
                    border-radius: 12px;
                    padding: 2.5rem 2rem;
                }
                .pricing-card.featured { border: 2px solid #2d8659; transform: scale(1.03); }
                .pricing-badge {
                    position: absolute;
                    top: -12px;
                    left: 50%;
                    transform: translateX(-50%);
                    background: #2d8659;
                    color: #fff;
                    padding: 4px 12px;
                    border-radius: 999px;
                    font-size: 0.8rem;
                }
                .pricing-price .amount { font-size: 2.5rem; font-weight: bold; color: #1f3d2e; }
                .pricing-price .period { color: #777; margin-left: 4px; }
                .pricing-features { list-style: none; padding: 0; margin: 1.5rem 0; }
                .pricing-features li { padding: 6px 0; border-bottom: 1px solid #f0f0f0; }
                .contact-form { max-width: 720px; margin: 0 auto; }
                .form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                .form-group { display: flex; flex-direction: column; margin-bottom: 1rem; }
                .form-group input, .form-group select, .form-group textarea {
                    border: 2px solid #e0e0e0;
                    border-radius: 8px;
                    padding: 12px;
                    font: inherit;
                    transition: border-color 0.2s ease;
                }
                .form-status { margin-top: 1rem; padding: 1rem; border-radius: 8px; background: #f4f4f4; }
                .form-status.success { background: #e3f2e9; color: #1f6b45; }
                .form-status.error { background: #fbe9eb; color: #a12a37; }
                .btn {
                    display: inline-block;
                    padding: 12px 28px;
                    border-radius: 8px;
                    border: none;
                    text-decoration: none;
                    font-weight: 600;
                    cursor: pointer;
                }
                .btn-primary { background: #2d8659; color: #fff; }
                .btn-primary:disabled { opacity: 0.6; cursor: not-allowed; }
                .btn-secondary { background: transparent; color: #2d8659; border: 2px solid #2d8659; }
                .footer { background: #1f3d2e; color: #d6e9dd; padding: 2rem; text-align: center; }
                .footer a { color: #fff; }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2.2rem; }
                    .form-row { grid-template-columns: 1fr; }
                }
                "#}
            </style>

            <section id="home" class="hero">
                <div class="hero-content">
                    <h1>{"Accelerating commercial solar deployment"}</h1>
                    <p>
                        {"NowPV takes commercial rooftop and ground-mount projects from first survey to grid connection, with feasibility, design and installation handled by one team."}
                    </p>
                    <div class="hero-cta-group">
                        <AnchorLink href="#contact" class="btn btn-primary">{"Request a Feasibility Study"}</AnchorLink>
                        <AnchorLink href="#pricing" class="btn btn-secondary">{"View Pricing"}</AnchorLink>
                    </div>
                </div>
            </section>

            <section id="mission">
                <div class="section-inner">
                    <h2 class="section-title">{"Our Mission"}</h2>
                    <div class="mission-grid">
                        <div class="mission-item">
                            <h3>{"Faster Projects"}</h3>
                            <p>{"Cut months out of the time between deciding on solar and generating from it."}</p>
                        </div>
                        <div class="mission-item">
                            <h3>{"Lower Costs"}</h3>
                            <p>{"Standardised designs and procurement keep the cost per kWp predictable."}</p>
                        </div>
                        <div class="mission-item">
                            <h3>{"Net Zero, Sooner"}</h3>
                            <p>{"Every site we energise moves a business measurably closer to its carbon targets."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="features">
                <div class="section-inner">
                    <h2 class="section-title">{"What We Do"}</h2>
                    <div class="features-grid">
                        <div class="feature">
                            <h3>{"Site Assessment"}</h3>
                            <p>{"Roof surveys, shading analysis and structural checks before anything is quoted."}</p>
                        </div>
                        <div class="feature">
                            <h3>{"System Design"}</h3>
                            <p>{"Array layouts and inverter sizing matched to your load profile."}</p>
                        </div>
                        <div class="feature">
                            <h3>{"Grid Applications"}</h3>
                            <p>{"We prepare and follow up DNO applications so connection isn't the bottleneck."}</p>
                        </div>
                        <div class="feature">
                            <h3>{"Installation & Monitoring"}</h3>
                            <p>{"Accredited installers and live generation monitoring from day one."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="benefits">
                <div class="section-inner">
                    <h2 class="section-title">{"Why NowPV"}</h2>
                    <div class="benefits-grid">
                        <div class="benefit-card">
                            <h3>{"Energy Savings"}</h3>
                            <p>{"Self-generated power displaces expensive daytime grid imports."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"Price Certainty"}</h3>
                            <p>{"Protect your operating costs from wholesale market swings."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"One Point of Contact"}</h3>
                            <p>{"A single project lead from survey through to handover."}</p>
                        </div>
                        <div class="benefit-card">
                            <h3>{"Reporting"}</h3>
                            <p>{"Generation and carbon figures ready for your sustainability reports."}</p>
                        </div>
                    </div>
                </div>
            </section>

            <section id="pricing">
                <div class="section-inner">
                    <h2 class="section-title">{"Pricing"}</h2>
                    <div class="pricing-grid">
                        <PricingCard
                            name="Starter"
                            price="£499"
                            period="per site"
                            features={vec![
                                "Desktop feasibility study",
                                "Generation estimate",
                                "Indicative payback period",
                            ]}
                        />
                        <PricingCard
                            name="Professional"
                            price="£1,950"
                            period="per site"
                            featured={true}
                            features={vec![
                                "On-site survey",
                                "Full system design",
                                "Grid connection application",
                                "Installer tender support",
                            ]}
                        />
                        <PricingCard
                            name="Enterprise"
                            price="Custom"
                            period="portfolio"
                            features={vec![
                                "Multi-site programme planning",
                                "Dedicated project manager",
                                "Portfolio monitoring dashboard",
                            ]}
                        />
                    </div>
                </div>
            </section>

            <section id="contact">
                <div class="section-inner">
                    <h2 class="section-title">{"Get in Touch"}</h2>
                    <ContactForm />
                </div>
            </section>

            <footer class="footer">
                <p>
                    {"NowPV by Ecosite · "}
                    <a href={format!("mailto:{}", config::SUPPORT_EMAIL)}>{config::SUPPORT_EMAIL}</a>
                </p>
            </footer>
        </main>
    }
}
