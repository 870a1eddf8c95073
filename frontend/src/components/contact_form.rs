use yew::prelude::*;
use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use crate::config;
use crate::state::{ContactArea, SubmissionStatus};

#[derive(Serialize, Debug)]
struct ContactRequest {
    name: String,
    email: String,
    message: String,
    bereich: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let status = use_state(SubmissionStatus::default);
    let area = use_state(ContactArea::default);
    let form_ref = use_node_ref();
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let status = status.clone();
        let area = area.clone();
        let form_ref = form_ref.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if status.is_submitting() {
                return;
            }
            status.set(SubmissionStatus::Submitting);

            let input_value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>().map(|i| i.value()).unwrap_or_default()
            };
            let request = ContactRequest {
                name: input_value(&name_ref),
                email: input_value(&email_ref),
                message: message_ref
                    .cast::<HtmlTextAreaElement>()
                    .map(|t| t.value())
                    .unwrap_or_default(),
                bereich: area.value().to_string(),
            };

            let status = status.clone();
            let area = area.clone();
            let form_ref = form_ref.clone();
            spawn_local(async move {
                let result = match Request::post(&format!("{}/api/contact", config::get_backend_url()))
                    .json(&request)
                {
                    Ok(req) => req.send().await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(response) => {
                        let outcome = SubmissionStatus::from_response_ok(response.ok());
                        if outcome == SubmissionStatus::Success {
                            if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                                form.reset();
                            }
                            area.set(ContactArea::default());
                        } else {
                            log::error!("Contact form rejected with status {}", response.status());
                        }
                        status.set(outcome);
                    }
                    Err(e) => {
                        log::error!("Fehler beim Senden des Formulars: {}", e);
                        status.set(SubmissionStatus::Error);
                    }
                }
            });
        })
    };

    let area_options = ContactArea::ALL.iter().map(|option| {
        let option = *option;
        let onchange = {
            let area = area.clone();
            Callback::from(move |_: Event| area.set(option))
        };
        html! {
            <div class="radio-option">
                <input
                    type="radio"
                    id={option.value()}
                    name="bereich"
                    value={option.value()}
                    checked={*area == option}
                    {onchange}
                />
                <label for={option.value()}>{option.label()}</label>
            </div>
        }
    }).collect::<Vec<Html>>();

    html! {
        <form ref={form_ref} class="contact-form" {onsubmit}>
            <style>
            {r#"
                .contact-form {
                    max-width: 42rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form label.field-label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }
                .contact-form input[type="text"],
                .contact-form input[type="email"],
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.5rem 0.75rem;
                    border-radius: 6px;
                    border: 1px solid #4b5563;
                    font: inherit;
                    transition: background-color 0.2s ease, color 0.2s ease;
                }
                .theme-dark .contact-form input, .theme-dark .contact-form textarea {
                    background: #1f2937;
                    color: #fff;
                }
                .theme-light .contact-form input, .theme-light .contact-form textarea {
                    background: #fff;
                    color: #000;
                }
                .radio-group {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .radio-option {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .contact-form .pill-button { width: 100%; }
                .contact-form .pill-button:disabled { opacity: 0.6; cursor: wait; }
                .form-feedback { text-align: center; }
                .form-feedback.success { color: #22c55e; }
                .form-feedback.error { color: #ef4444; }
            "#}
            </style>
            <div>
                <label for="name" class="field-label">{"Name"}</label>
                <input ref={name_ref} type="text" id="name" name="name" required={true} placeholder="Max Mustermann" />
            </div>
            <div>
                <label for="email" class="field-label">{"E-Mail"}</label>
                <input ref={email_ref} type="email" id="email" name="email" required={true} placeholder="max.mustermann@example.com" />
            </div>
            <div>
                <label class="field-label">{"Bereich"}</label>
                <div class="radio-group">
                    { for area_options }
                </div>
            </div>
            <div>
                <label for="message" class="field-label">{"Nachricht"}</label>
                <textarea
                    ref={message_ref}
                    id="message"
                    name="message"
                    rows="4"
                    required={true}
                    placeholder="Ich interessiere mich für Ihre KI-Lösungen und möchte mehr erfahren..."
                />
            </div>
            <div>
                <button type="submit" class="pill-button" disabled={status.is_submitting()}>
                    {status.button_label()}
                    {" →"}
                </button>
            </div>
            if let Some((class, text)) = status.feedback() {
                <p {class}>{text}</p>
            }
        </form>
    }
}
