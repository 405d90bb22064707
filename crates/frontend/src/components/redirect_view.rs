//! OAuth redirect page: trades the provider's answer for a session

use super::Spinner;
use crate::browser::WebBrowser;
use crate::services::HttpAuthBackend;
use dash_auth_core::{RedirectFlow, RedirectState, RuntimeConfig, Screen};
use std::rc::Rc;
use tracing::error;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RedirectViewProps {
    pub config: Rc<RuntimeConfig>,
}

#[function_component(RedirectView)]
pub fn redirect_view(props: &RedirectViewProps) -> Html {
    let state = use_state(RedirectState::default);

    // One handshake per mount
    {
        let state = state.clone();
        let config = props.config.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let browser = match WebBrowser::new() {
                    Ok(browser) => browser,
                    Err(e) => {
                        error!("{e}");
                        return;
                    }
                };
                let flow = RedirectFlow::new(HttpAuthBackend::new(&config));
                flow.run(&browser, |next| state.set(next.clone())).await;
            });
            || ()
        });
    }

    html! {
        <ScreenView screen={state.screen()} />
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ScreenViewProps {
    pub screen: Screen,
}

/// Markup for one redirect page screen
#[function_component(ScreenView)]
pub fn screen_view(props: &ScreenViewProps) -> Html {
    let content = match &props.screen {
        Screen::Loading => html! { <Spinner text="Loading..." /> },
        Screen::NotAuthorized => html! {
            <div id="dash-auth--authorization__denied">
                {"You are not authorized to view this app"}
            </div>
        },
        // The flow has already asked the window to close
        Screen::CloseWindow => html! {},
        Screen::Error { detail } => html! {
            <div>
                <h3>{"Yikes! An error occurred trying to log in."}</h3>
                <p>{"Please contact SolveBio Support or try again."}</p>
                <p>{"Additional information:"}</p>
                if let Some(detail) = detail {
                    <pre>{detail.clone()}</pre>
                }
            </div>
        },
    };

    html! {
        <div>{content}</div>
    }
}
