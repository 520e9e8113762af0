//! Home Page
//!
//! Single-page site: hero, service catalog, portfolio, about and the
//! contact form that opens checkout.

use leptos::prelude::*;
use leptos::task::spawn_local;

use cutline_core::{Catalog, CoreError};

use crate::api;
use crate::checkout::CheckoutModal;
use crate::components::ServiceCard;

const PORTFOLIO: [(&str, &str); 3] = [
    ("Brand Story", "Commercial cut with custom color grade"),
    ("Launch Trailer", "Motion titles and sound design"),
    ("Wedding Film", "Multi-camera edit, cinematic grade"),
];

const SKILLS: [&str; 4] = [
    "Premiere Pro & DaVinci Resolve",
    "After Effects motion graphics",
    "Color grading",
    "Audio mixing & sound design",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = RwSignal::new(Catalog::standard());
    let selected = RwSignal::new(None::<String>);

    // Built-in catalog stays if the backend is unreachable
    spawn_local(async move {
        match api::fetch_pricing().await {
            Ok(fetched) if !fetched.is_empty() => catalog.set(fetched),
            Ok(_) => leptos::logging::warn!("Pricing endpoint returned no services"),
            Err(e) => leptos::logging::warn!("Using built-in pricing: {e}"),
        }
    });

    view! {
        <div class="home">
            <header class="hero" id="home">
                <h1>"Professional Video Editing"</h1>
                <p class="tagline">"From raw footage to a finished story"</p>
                <div class="cta">
                    <a href="#services" class="btn btn-primary">"View Services"</a>
                    <a href="#contact" class="btn">"Get in Touch"</a>
                </div>
            </header>

            <section class="services" id="services">
                <h2>"Services"</h2>
                <div class="services-grid">
                    <For
                        each=move || {
                            catalog.with(|catalog| {
                                catalog
                                    .iter()
                                    .map(|(key, offering)| (key.to_string(), offering.clone()))
                                    .collect::<Vec<_>>()
                            })
                        }
                        key=|(key, offering)| (key.clone(), offering.price)
                        children=move |(service_key, offering)| {
                            view! { <ServiceCard service_key offering selected /> }
                        }
                    />
                </div>
            </section>

            <section class="portfolio" id="portfolio">
                <h2>"Portfolio"</h2>
                <div class="portfolio-grid">
                    {PORTFOLIO
                        .iter()
                        .map(|(title, blurb)| {
                            view! {
                                <div class="portfolio-item">
                                    <h3>{*title}</h3>
                                    <p>{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="about" id="about">
                <h2>"About"</h2>
                <p>
                    "Independent editor cutting commercials and wedding films. "
                    "Every project gets a dedicated review round before delivery."
                </p>
                <div class="skills">
                    {SKILLS
                        .iter()
                        .map(|skill| view! { <div class="skill-item">{*skill}</div> })
                        .collect_view()}
                </div>
            </section>

            <ContactForm catalog selected />
            <CheckoutModal catalog selected />
        </div>
    }
}

/// Picking a service here opens the same checkout as the service cards
#[component]
fn ContactForm(catalog: RwSignal<Catalog>, selected: RwSignal<Option<String>>) -> impl IntoView {
    let choice = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let key = choice.get_untracked();
        if catalog.with_untracked(|catalog| catalog.contains(&key)) {
            selected.set(Some(key));
        } else if let Some(window) = web_sys::window() {
            let message = CoreError::UnknownService(key).user_message().to_string();
            if let Err(e) = window.alert_with_message(&message) {
                leptos::logging::error!("alert failed: {e:?}");
            }
        }
    };

    view! {
        <section class="contact" id="contact">
            <h2>"Start a Project"</h2>
            <form id="contact-form" on:submit=on_submit>
                <input type="text" name="name" placeholder="Your name" required />
                <input type="email" name="email" placeholder="Your email" required />
                <select
                    name="service"
                    prop:value=move || choice.get()
                    on:change=move |ev| choice.set(event_target_value(&ev))
                >
                    <option value="">"Select a service"</option>
                    {move || {
                        catalog
                            .with(|catalog| {
                                catalog
                                    .iter()
                                    .map(|(key, offering)| {
                                        let label = format!(
                                            "{} - ${}",
                                            offering.name,
                                            offering.display_price(),
                                        );
                                        view! { <option value=key.to_string()>{label}</option> }
                                    })
                                    .collect::<Vec<_>>()
                            })
                    }}
                </select>
                <textarea name="message" placeholder="Tell me about your project"></textarea>
                <button type="submit" class="btn-primary">"Continue to Payment"</button>
            </form>
        </section>
    }
}
