use dash_auth_frontend::{RedirectView, RedirectViewProps, mount, start};

fn main() {
    if let Some(config) = start() {
        mount::<RedirectView>(RedirectViewProps { config });
    }
}
