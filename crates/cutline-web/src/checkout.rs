//! Checkout Modal
//!
//! Mock card form. Submitting never reaches the payment API: after
//! `PROCESSING_DELAY` the confirmation is built locally.

use chrono::Utc;
use leptos::prelude::*;

use cutline_core::card::{
    format_card_number, format_expiry, CARD_NUMBER_MAX_LEN, CVC_MAX_LEN, EXPIRY_MAX_LEN,
};
use cutline_core::checkout::{PROCESSING_DELAY, SUCCESS_DISMISS_DELAY};
use cutline_core::{simulate_confirmation, CardForm, Catalog, CheckoutTicket, ConfirmResponse};

use crate::components::PaymentReceipt;

const PAYMENT_FAILED: &str = "Payment failed. Please try again.";

#[derive(Clone, Debug, PartialEq)]
enum PaymentStatus {
    Idle,
    Processing,
    Failed(String),
    Succeeded {
        confirmation: ConfirmResponse,
        service_name: String,
    },
}

impl PaymentStatus {
    fn is_processing(&self) -> bool {
        matches!(self, PaymentStatus::Processing)
    }

    fn css_class(&self) -> &'static str {
        match self {
            PaymentStatus::Failed(_) => "error",
            PaymentStatus::Succeeded { .. } => "success",
            PaymentStatus::Idle | PaymentStatus::Processing => "",
        }
    }
}

#[component]
pub fn CheckoutModal(
    catalog: RwSignal<Catalog>,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let form = RwSignal::new(CardForm::default());
    let status = RwSignal::new(PaymentStatus::Idle);
    let ticket = RwSignal::new(CheckoutTicket::default());

    let reset = move || {
        ticket.update(|t| *t = t.next());
        form.update(CardForm::clear);
        status.set(PaymentStatus::Idle);
    };
    let is_current = move |submitted: CheckoutTicket| ticket.get_untracked() == submitted;
    let close = move || {
        selected.set(None);
        reset();
    };

    let submit = move |_: leptos::ev::MouseEvent| {
        if status.with_untracked(PaymentStatus::is_processing) {
            return;
        }
        if let Err(e) = form.with_untracked(CardForm::validate) {
            status.set(PaymentStatus::Failed(e.user_message().to_string()));
            return;
        }
        let Some(service_key) = selected.get_untracked() else {
            return;
        };

        let submitted = ticket.get_untracked();
        status.set(PaymentStatus::Processing);

        set_timeout(
            move || {
                // Modal was closed (and maybe reopened) while "processing"
                if !is_current(submitted) {
                    return;
                }

                let outcome = catalog.with_untracked(|catalog| {
                    let service_name = catalog.require(&service_key)?.name.clone();
                    let confirmation = simulate_confirmation(
                        catalog,
                        &service_key,
                        Utc::now().timestamp_millis(),
                    )?;
                    Ok::<_, cutline_core::CoreError>((confirmation, service_name))
                });

                match outcome {
                    Ok((confirmation, service_name)) => {
                        status.set(PaymentStatus::Succeeded {
                            confirmation,
                            service_name,
                        });
                        set_timeout(
                            move || {
                                if is_current(submitted) {
                                    close();
                                }
                            },
                            SUCCESS_DISMISS_DELAY,
                        );
                    }
                    Err(e) => {
                        leptos::logging::error!("Payment error: {e}");
                        status.set(PaymentStatus::Failed(PAYMENT_FAILED.to_string()));
                    }
                }
            },
            PROCESSING_DELAY,
        );
    };

    let summary = move || {
        let key = selected.get()?;
        let offering = catalog.with(|catalog| catalog.get(&key).cloned())?;
        Some(view! {
            <div class="service-summary">
                <h4>{offering.name.clone()}</h4>
                <p>{offering.description.clone()}</p>
                <div class="price-summary">
                    <strong>{format!("Total: ${}", offering.display_price())}</strong>
                </div>
            </div>
        })
    };

    let status_view = move || match status.get() {
        PaymentStatus::Idle | PaymentStatus::Processing => None,
        PaymentStatus::Failed(message) => Some(view! { <p>{message}</p> }.into_any()),
        PaymentStatus::Succeeded {
            confirmation,
            service_name,
        } => Some(view! { <PaymentReceipt confirmation service_name /> }.into_any()),
    };

    view! {
        <Show when=move || selected.with(Option::is_some)>
            <div class="modal" id="payment-modal" on:click=move |_| close()>
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    <span class="close" on:click=move |_| close()>"×"</span>
                    <h2>"Complete Your Order"</h2>
                    <div id="payment-details">{summary}</div>

                    <div id="payment-form" class="payment-element-mock">
                        <div class="card-input-group">
                            <label>"Card Number"</label>
                            <input
                                type="text"
                                id="card-number"
                                placeholder="1234 5678 9012 3456"
                                maxlength=CARD_NUMBER_MAX_LEN.to_string()
                                prop:value=move || form.with(|f| f.number.clone())
                                on:input=move |ev| {
                                    let value = format_card_number(&event_target_value(&ev));
                                    form.update(|f| f.number = value);
                                }
                            />
                        </div>
                        <div class="card-input-row">
                            <div class="card-input-group">
                                <label>"Expiry"</label>
                                <input
                                    type="text"
                                    id="card-expiry"
                                    placeholder="MM/YY"
                                    maxlength=EXPIRY_MAX_LEN.to_string()
                                    prop:value=move || form.with(|f| f.expiry.clone())
                                    on:input=move |ev| {
                                        let value = format_expiry(&event_target_value(&ev));
                                        form.update(|f| f.expiry = value);
                                    }
                                />
                            </div>
                            <div class="card-input-group">
                                <label>"CVC"</label>
                                <input
                                    type="text"
                                    id="card-cvc"
                                    placeholder="123"
                                    maxlength=CVC_MAX_LEN.to_string()
                                    prop:value=move || form.with(|f| f.cvc.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        form.update(|f| f.cvc = value);
                                    }
                                />
                            </div>
                        </div>
                        <div class="card-input-group">
                            <label>"Cardholder Name"</label>
                            <input
                                type="text"
                                id="card-name"
                                placeholder="John Doe"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </div>
                    </div>

                    <button
                        id="submit-payment"
                        class="btn-primary"
                        on:click=submit
                        disabled=move || status.with(PaymentStatus::is_processing)
                    >
                        {move || {
                            if status.with(PaymentStatus::is_processing) {
                                "Processing..."
                            } else {
                                "Pay Now"
                            }
                        }}
                    </button>
                    <div id="payment-status" class=move || status.with(PaymentStatus::css_class)>
                        {status_view}
                    </div>
                </div>
            </div>
        </Show>
    }
}
