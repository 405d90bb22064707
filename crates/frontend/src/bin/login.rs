use dash_auth_frontend::{LoginView, LoginViewProps, mount, start};

fn main() {
    if let Some(config) = start() {
        mount::<LoginView>(LoginViewProps { config });
    }
}
