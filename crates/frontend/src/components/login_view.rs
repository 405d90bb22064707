//! Login page: launches the provider popup and reloads once it closes

use crate::browser::WebBrowser;
use crate::timer::IntervalTimer;
use dash_auth_core::config::SUPPORT_EMAIL;
use dash_auth_core::{LoginFlow, RepeatingTimer, RuntimeConfig};
use std::rc::Rc;
use tracing::{error, warn};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct LoginViewProps {
    pub config: Rc<RuntimeConfig>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let timer = use_mut_ref(IntervalTimer::default);
    let popup_error = use_state(|| Option::<String>::None);

    // Stop polling if the page tears the view down while the popup is open
    {
        let timer = timer.clone();
        use_effect_with((), move |_| move || timer.borrow_mut().stop());
    }

    let on_login = {
        let config = props.config.clone();
        let timer = timer.clone();
        let popup_error = popup_error.clone();

        Callback::from(move |_: MouseEvent| {
            let browser = match WebBrowser::new() {
                Ok(browser) => browser,
                Err(e) => {
                    error!("{e}");
                    popup_error.set(Some(e.to_string()));
                    return;
                }
            };

            let flow = LoginFlow::new((*config).clone());
            match flow.begin(&browser) {
                Ok(watcher) => {
                    popup_error.set(None);
                    watcher.watch(Rc::new(browser), &mut *timer.borrow_mut());
                }
                Err(e) => {
                    warn!("Could not start login: {e}");
                    popup_error.set(Some(e.to_string()));
                }
            }
        })
    };

    html! {
        <div id="dash-auth--login__container" class="container">
            <h2>{"Secure Dash App"}</h2>

            <h4>{"Log in to SolveBio to continue"}</h4>

            <button id="dash-auth--login__button" onclick={on_login}>
                {"Log in"}
            </button>

            if let Some(message) = &*popup_error {
                <p class="error">{message}</p>
            }

            <div class="caption">
                <span>{"This app requires a SolveBio account."}</span>
                <br />
                <a href={format!("mailto:{SUPPORT_EMAIL}")}>{"Contact Support"}</a>
            </div>
        </div>
    }
}
