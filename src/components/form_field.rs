use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub const FOCUS_BORDER: &str = "#2d8659";
pub const INVALID_BORDER: &str = "#dc3545";
pub const NEUTRAL_BORDER: &str = "#e0e0e0";

/// Border shown once a field loses focus.
pub fn blur_border(required: bool, value: &str) -> &'static str {
    if required && value.is_empty() {
        INVALID_BORDER
    } else {
        NEUTRAL_BORDER
    }
}

/// Current value of whatever form control `node_ref` points at.
pub fn field_value(node_ref: &NodeRef) -> String {
    if let Some(input) = node_ref.cast::<HtmlInputElement>() {
        input.value()
    } else if let Some(select) = node_ref.cast::<HtmlSelectElement>() {
        select.value()
    } else if let Some(textarea) = node_ref.cast::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

#[derive(Clone, PartialEq)]
pub enum FieldKind {
    Input(&'static str),
    Select(Vec<(&'static str, &'static str)>),
    TextArea,
}

#[derive(Properties, PartialEq)]
pub struct FormFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub kind: FieldKind,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub placeholder: AttrValue,
}

#[function_component(FormField)]
pub fn form_field(props: &FormFieldProps) -> Html {
    let border = use_state(|| None::<&'static str>);

    let onfocus = {
        let border = border.clone();
        Callback::from(move |_: FocusEvent| {
            border.set(Some(FOCUS_BORDER));
        })
    };

    let onblur = {
        let border = border.clone();
        let node_ref = props.node_ref.clone();
        let required = props.required;
        Callback::from(move |_: FocusEvent| {
            border.set(Some(blur_border(required, &field_value(&node_ref))));
        })
    };

    let style = (*border).map(|color| format!("border-color: {};", color));

    let control = match &props.kind {
        FieldKind::Input(input_type) => html! {
            <input
                type={*input_type}
                id={props.id.clone()}
                name={props.id.clone()}
                ref={props.node_ref.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                style={style}
                onfocus={onfocus}
                onblur={onblur}
            />
        },
        FieldKind::Select(options) => html! {
            <select
                id={props.id.clone()}
                name={props.id.clone()}
                ref={props.node_ref.clone()}
                required={props.required}
                style={style}
                onfocus={onfocus}
                onblur={onblur}
            >
                { for options.iter().map(|(value, label)| html! {
                    <option value={*value}>{*label}</option>
                }) }
            </select>
        },
        FieldKind::TextArea => html! {
            <textarea
                id={props.id.clone()}
                name={props.id.clone()}
                rows="5"
                ref={props.node_ref.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                style={style}
                onfocus={onfocus}
                onblur={onblur}
            />
        },
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>{props.label.clone()}</label>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_empty_field_turns_red() {
        assert_eq!(blur_border(true, ""), INVALID_BORDER);
    }

    #[test]
    fn filled_or_optional_fields_are_neutral() {
        assert_eq!(blur_border(true, "Ada"), NEUTRAL_BORDER);
        assert_eq!(blur_border(false, ""), NEUTRAL_BORDER);
    }
}
