//! Page components

mod login_view;
mod redirect_view;
mod spinner;

pub use login_view::{LoginView, LoginViewProps};
pub use redirect_view::{RedirectView, RedirectViewProps, ScreenView, ScreenViewProps};
pub use spinner::LoadingSpinner as Spinner;
