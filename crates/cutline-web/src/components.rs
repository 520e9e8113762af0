//! UI Components

use leptos::prelude::*;

use cutline_core::{ConfirmResponse, ServiceOffering};

/// Top navigation with a collapsible mobile menu
#[component]
pub fn NavBar() -> impl IntoView {
    let (open, set_open) = signal(false);
    let close = move |_: leptos::ev::MouseEvent| set_open.set(false);

    view! {
        <nav class="navbar">
            <div class="nav-container">
                <a href="#home" class="nav-logo">"cutline"</a>
                <ul class="nav-menu" class:active=move || open.get()>
                    <li><a href="#home" on:click=close>"Home"</a></li>
                    <li><a href="#services" on:click=close>"Services"</a></li>
                    <li><a href="#portfolio" on:click=close>"Portfolio"</a></li>
                    <li><a href="#about" on:click=close>"About"</a></li>
                    <li><a href="#contact" on:click=close>"Contact"</a></li>
                </ul>
                <div
                    class="nav-toggle"
                    class:active=move || open.get()
                    on:click=move |_| set_open.update(|open| *open = !*open)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </div>
            </div>
        </nav>
    }
}

/// One service in the catalog grid
#[component]
pub fn ServiceCard(
    service_key: String,
    offering: ServiceOffering,
    selected: RwSignal<Option<String>>,
) -> impl IntoView {
    let price = format!("${}", offering.display_price());

    view! {
        <div class="service-card">
            <div class="service-header">
                <div>
                    <h3>{offering.name}</h3>
                    <div class="service-duration">"⏱️ "{offering.duration}</div>
                </div>
                <div class="service-price">{price}</div>
            </div>
            <p>{offering.description}</p>
            <button
                class="btn-primary"
                on:click=move |_| selected.set(Some(service_key.clone()))
            >
                "Select Service"
            </button>
        </div>
    }
}

/// Success panel shown after a mock payment
#[component]
pub fn PaymentReceipt(confirmation: ConfirmResponse, service_name: String) -> impl IntoView {
    let ConfirmResponse {
        payment,
        crypto_payout,
        ..
    } = confirmation;

    view! {
        <div class="payment-success">
            <h4>"✅ Payment Successful!"</h4>
            <p><strong>"Order ID: "</strong>{payment.id}</p>
            <p><strong>"Service: "</strong>{service_name}</p>
            <p><strong>"Amount: "</strong>{format!("${:.2}", payment.amount)}</p>
            <hr />
            <p><strong>"Crypto Payout Processed:"</strong></p>
            <p>{format!("{} {}", crypto_payout.crypto_amount, crypto_payout.crypto_currency)}</p>
            <p><strong>"Transaction ID: "</strong>{crypto_payout.transaction_id}</p>
            <p>
                "You will receive an email confirmation shortly. "
                "We'll get started on your project within 24 hours!"
            </p>
        </div>
    }
}
