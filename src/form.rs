// Contact form: validation plus the WhatsApp and mailto deep links. URL
// building and the validation rules are plain string work so they stay
// testable off the browser; only the wiring at the bottom touches the DOM.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window,
};

const FORM_ID: &str = "contact-form";
const WHATSAPP_BUTTON_ID: &str = "whatsapp-btn";
const EMAIL_BUTTON_ID: &str = "email-btn";

const WHATSAPP_NUMBER: &str = "+918825164657";
const CONTACT_EMAIL: &str = "TechilyFly@gmail.com";
const MAIL_SUBJECT: &str = "New Project Inquiry - Techily Fly";

/// One submission attempt's worth of form input. Six of the seven fields are
/// required; company is not.
#[derive(Clone, Debug, Default)]
pub struct Inquiry {
    pub full_name: String,
    pub email: String,
    pub whatsapp: String,
    pub company: String,
    pub service: String,
    pub budget: String,
    pub description: String,
}

/// Checks every rule and reports all violations at once, in field order.
pub fn validate(inquiry: &Inquiry) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if inquiry.full_name.is_empty() {
        errors.push("Full name is required".to_owned());
    }
    if inquiry.email.is_empty() {
        errors.push("Email is required".to_owned());
    }
    if inquiry.whatsapp.is_empty() {
        errors.push("WhatsApp number is required".to_owned());
    }
    if inquiry.service.is_empty() {
        errors.push("Service selection is required".to_owned());
    }
    if inquiry.budget.is_empty() {
        errors.push("Budget range is required".to_owned());
    }
    if inquiry.description.is_empty() {
        errors.push("Project description is required".to_owned());
    }

    if !inquiry.email.is_empty() && !is_valid_email(&inquiry.email) {
        errors.push("Please enter a valid email address".to_owned());
    }
    if !inquiry.whatsapp.is_empty() && !is_valid_phone(&inquiry.whatsapp) {
        errors.push("Please enter a valid WhatsApp number".to_owned());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// Something@something.tld: no whitespace, exactly one @, and a dotted domain
// that neither starts nor ends on the dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        _ => false,
    }
}

// Digits plus the usual separators, and at least ten digits overall.
pub fn is_valid_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return false;
    }
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || "-+()".contains(c));
    allowed && digits(phone).len() >= 10
}

fn digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

pub fn whatsapp_url(inquiry: &Inquiry) -> String {
    format!(
        "https://wa.me/{}?text={}",
        digits(WHATSAPP_NUMBER),
        urlencoding::encode(&whatsapp_message(inquiry))
    )
}

pub fn mailto_url(inquiry: &Inquiry) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        CONTACT_EMAIL,
        urlencoding::encode(MAIL_SUBJECT),
        urlencoding::encode(&email_body(inquiry))
    )
}

fn whatsapp_message(inquiry: &Inquiry) -> String {
    format!(
        "*New Project Inquiry - Techily Fly*\n\n\
         *Full Name:* {}\n\
         *Email:* {}\n\
         *WhatsApp:* {}\n\
         *Company/Brand:* {}\n\
         *Service:* {}\n\
         *Budget Range:* {}\n\
         *Project Description:* {}\n\n\
         --- Sent via Techily Fly Website ---",
        inquiry.full_name,
        inquiry.email,
        inquiry.whatsapp,
        inquiry.company,
        inquiry.service,
        inquiry.budget,
        inquiry.description
    )
}

fn email_body(inquiry: &Inquiry) -> String {
    format!(
        "New Project Inquiry Details:\n\n\
         Full Name: {}\n\
         Email: {}\n\
         WhatsApp: {}\n\
         Company/Brand: {}\n\
         Service: {}\n\
         Budget Range: {}\n\n\
         Project Description:\n{}\n\n\
         --- Sent via Techily Fly Website ---",
        inquiry.full_name,
        inquiry.email,
        inquiry.whatsapp,
        inquiry.company,
        inquiry.service,
        inquiry.budget,
        inquiry.description
    )
}

pub fn init(window: &Window, document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(FORM_ID).is_none() {
        return Ok(());
    }

    if let Some(button) = document.get_element_by_id(WHATSAPP_BUTTON_ID) {
        let window_handle = window.clone();
        let document_handle = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let inquiry = read_inquiry(&document_handle);
            match validate(&inquiry) {
                Ok(()) => {
                    window_handle
                        .open_with_url_and_target(&whatsapp_url(&inquiry), "_blank")
                        .ok();
                }
                Err(errors) => report_errors(&window_handle, &errors),
            }
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    if let Some(button) = document.get_element_by_id(EMAIL_BUTTON_ID) {
        let window_handle = window.clone();
        let document_handle = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let inquiry = read_inquiry(&document_handle);
            match validate(&inquiry) {
                Ok(()) => {
                    window_handle.location().set_href(&mailto_url(&inquiry)).ok();
                }
                Err(errors) => report_errors(&window_handle, &errors),
            }
        }) as Box<dyn FnMut(Event)>);
        button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    init_focus_styling(document)?;
    Ok(())
}

// One blocking alert listing every violated rule, as the site always did.
fn report_errors(window: &Window, errors: &[String]) {
    let message = format!("Please fix the following errors:\n\n{}", errors.join("\n"));
    window.alert_with_message(&message).ok();
}

fn read_inquiry(document: &Document) -> Inquiry {
    Inquiry {
        full_name: input_value(document, "full-name"),
        email: input_value(document, "email"),
        whatsapp: input_value(document, "whatsapp"),
        company: input_value(document, "company"),
        service: select_value(document, "service"),
        budget: select_value(document, "budget"),
        description: textarea_value(document, "description"),
    }
}

fn input_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value().trim().to_owned())
        .unwrap_or_default()
}

fn select_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlSelectElement>().ok())
        .map(|select| select.value())
        .unwrap_or_default()
}

fn textarea_value(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlTextAreaElement>().ok())
        .map(|area| area.value().trim().to_owned())
        .unwrap_or_default()
}

// Capture-phase focus/blur so the handlers also cover fields injected after
// startup. The parent keeps the `focused` class while the field holds a value.
fn init_focus_styling(document: &Document) -> Result<(), JsValue> {
    let focus = Closure::wrap(Box::new(move |event: Event| {
        if let Some(field) = form_field(&event) {
            if let Some(parent) = field.parent_element() {
                parent.class_list().add_1("focused").ok();
            }
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback_and_bool(
        "focus",
        focus.as_ref().unchecked_ref(),
        true,
    )?;
    focus.forget();

    let blur = Closure::wrap(Box::new(move |event: Event| {
        if let Some(field) = form_field(&event) {
            if field_value(&field).is_empty() {
                if let Some(parent) = field.parent_element() {
                    parent.class_list().remove_1("focused").ok();
                }
            }
        }
    }) as Box<dyn FnMut(Event)>);
    document.add_event_listener_with_callback_and_bool(
        "blur",
        blur.as_ref().unchecked_ref(),
        true,
    )?;
    blur.forget();

    Ok(())
}

fn form_field(event: &Event) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    match target.tag_name().as_str() {
        "INPUT" | "TEXTAREA" | "SELECT" => Some(target),
        _ => None,
    }
}

fn field_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_inquiry() -> Inquiry {
        Inquiry {
            full_name: "Asha Rao".to_owned(),
            email: "asha@example.com".to_owned(),
            whatsapp: "+91 88251 64657".to_owned(),
            company: "Rao Textiles".to_owned(),
            service: "Web Development".to_owned(),
            budget: "$500 - $1000".to_owned(),
            description: "Need a storefront & booking flow".to_owned(),
        }
    }

    #[test]
    fn empty_form_reports_each_required_field() {
        let errors = validate(&Inquiry::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Full name is required",
                "Email is required",
                "WhatsApp number is required",
                "Service selection is required",
                "Budget range is required",
                "Project description is required",
            ]
        );
    }

    #[test]
    fn complete_inquiry_passes() {
        assert!(validate(&complete_inquiry()).is_ok());
    }

    #[test]
    fn company_is_optional() {
        let mut inquiry = complete_inquiry();
        inquiry.company.clear();
        assert!(validate(&inquiry).is_ok());
    }

    #[test]
    fn malformed_contact_details_are_rejected() {
        let mut inquiry = complete_inquiry();
        inquiry.email = "not-an-email".to_owned();
        inquiry.whatsapp = "call me".to_owned();
        let errors = validate(&inquiry).unwrap_err();
        assert_eq!(
            errors,
            vec![
                "Please enter a valid email address",
                "Please enter a valid WhatsApp number",
            ]
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a@.co"));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+91 88251 64657"));
        assert!(is_valid_phone("(882) 516-46570"));
        assert!(!is_valid_phone("88251"));
        assert!(!is_valid_phone("+91-call-me-now"));
    }

    #[test]
    fn whatsapp_url_targets_business_number_with_encoded_payload() {
        let url = whatsapp_url(&complete_inquiry());
        assert!(url.starts_with("https://wa.me/918825164657?text="));
        assert!(url.contains("Asha%20Rao"));
        assert!(url.contains("asha%40example.com"));
        assert!(url.contains("%2B91%2088251%2064657"));
        assert!(url.contains("Rao%20Textiles"));
        assert!(url.contains("Web%20Development"));
        assert!(url.contains("%24500%20-%20%241000"));
        assert!(url.contains("storefront%20%26%20booking"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn mailto_url_carries_subject_and_body() {
        let url = mailto_url(&complete_inquiry());
        assert!(url.starts_with(
            "mailto:TechilyFly@gmail.com?subject=New%20Project%20Inquiry%20-%20Techily%20Fly&body="
        ));
        assert!(url.contains("Full%20Name%3A%20Asha%20Rao"));
        assert!(url.contains("Sent%20via%20Techily%20Fly%20Website"));
    }
}
