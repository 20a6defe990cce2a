use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlFormElement;
use yew::prelude::*;

use crate::components::form_field::{field_value, FieldKind, FormField};
use crate::config;

use super::submission::{start_submission, FormSubmission, Submitter};

const SUBMIT_LABEL: &str = "Send Message";

pub const PLAN_OPTIONS: &[(&str, &str)] = &[
    ("", "Select a plan"),
    ("Starter", "Starter"),
    ("Professional", "Professional"),
    ("Enterprise", "Enterprise"),
    ("Not sure yet", "Not sure yet"),
];

#[derive(Clone, PartialEq, Default)]
struct FieldRefs {
    name: NodeRef,
    email: NodeRef,
    company: NodeRef,
    phone: NodeRef,
    plan: NodeRef,
    message: NodeRef,
}

impl FieldRefs {
    fn read(&self) -> FormSubmission {
        FormSubmission {
            name: field_value(&self.name),
            email: field_value(&self.email),
            company: field_value(&self.company),
            phone: field_value(&self.phone),
            plan: field_value(&self.plan),
            message: field_value(&self.message),
        }
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let form_ref = use_node_ref();
    let fields = use_memo(|_| FieldRefs::default(), ());
    let submitter = use_mut_ref(|| Submitter::new(SUBMIT_LABEL));
    let strategy = use_memo(|_| config::submission_strategy(), ());
    let rerender = use_force_update();

    let onsubmit = {
        let form_ref = form_ref.clone();
        let fields = fields.clone();
        let submitter = submitter.clone();
        let strategy = strategy.clone();
        let rerender = rerender.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let send = {
                let strategy = strategy.clone();
                move |submission: FormSubmission| async move {
                    log::info!("Submitting contact form for plan {:?}", submission.plan);
                    strategy.submit(&submission).await
                }
            };
            let reset = {
                let form_ref = form_ref.clone();
                move || {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
            };

            let pending = match start_submission(submitter.clone(), fields.read(), send, reset) {
                Ok(pending) => pending,
                Err(err) => {
                    log::warn!("Ignoring contact form submit: {}", err);
                    return;
                }
            };
            rerender.force_update();

            let submitter = submitter.clone();
            let strategy = strategy.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                let completion = pending.await;
                rerender.force_update();

                let ticket = completion.ticket;
                if let Some(message) = completion.follow_up(strategy.follow_up()) {
                    let submitter = submitter.clone();
                    let rerender = rerender.clone();
                    Timeout::new(config::MAIL_FOLLOW_UP_DELAY_MS, move || {
                        if submitter.borrow_mut().follow_up(ticket, message) {
                            rerender.force_update();
                        }
                    })
                    .forget();
                }

                if completion.auto_hide {
                    Timeout::new(config::STATUS_HIDE_DELAY_MS, move || {
                        if submitter.borrow_mut().hide_status(ticket) {
                            rerender.force_update();
                        }
                    })
                    .forget();
                }
            });
        })
    };

    let state = submitter.borrow();
    let status = state.status();
    let status_style = if status.visible { "display: block;" } else { "display: none;" };

    html! {
        <form id="contactForm" class="contact-form" ref={form_ref} onsubmit={onsubmit}>
            <div class="form-row">
                <FormField id="name" label="Name *" kind={FieldKind::Input("text")}
                    node_ref={fields.name.clone()} required={true} placeholder="Your name" />
                <FormField id="email" label="Email *" kind={FieldKind::Input("email")}
                    node_ref={fields.email.clone()} required={true} placeholder="you@company.com" />
            </div>
            <div class="form-row">
                <FormField id="company" label="Company" kind={FieldKind::Input("text")}
                    node_ref={fields.company.clone()} placeholder="Company name" />
                <FormField id="phone" label="Phone" kind={FieldKind::Input("tel")}
                    node_ref={fields.phone.clone()} placeholder="+44" />
            </div>
            <FormField id="plan" label="Interested In *" kind={FieldKind::Select(PLAN_OPTIONS.to_vec())}
                node_ref={fields.plan.clone()} required={true} />
            <FormField id="message" label="Message" kind={FieldKind::TextArea}
                node_ref={fields.message.clone()} placeholder="Tell us about your projects" />
            <button type="submit" class="btn btn-primary" disabled={!state.is_enabled()}>
                {state.button_label().to_string()}
            </button>
            <div id="formStatus" class={status.class_name()} style={status_style}>
                {status.message.clone()}
            </div>
        </form>
    }
}
