use leptos::*;
use leptos_router::*;

use crate::{
    components::{
        guard::{RedirectIfSession, RequireSession},
        layout::Layout,
    },
    pages::{converter::ConverterPage, home::HomePage, login::LoginPage, records::RecordsPage},
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/converter", "/records"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/converter", "/records"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=PublicLogin/>
                    <Route path="/converter" view=ProtectedConverter/>
                    <Route path="/records" view=ProtectedRecords/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn PublicLogin() -> impl IntoView {
    view! { <RedirectIfSession><LoginPage/></RedirectIfSession> }
}

#[component]
fn ProtectedConverter() -> impl IntoView {
    view! {
        <RequireSession>
            <Layout>
                <ConverterPage/>
            </Layout>
        </RequireSession>
    }
}

#[component]
fn ProtectedRecords() -> impl IntoView {
    view! {
        <RequireSession>
            <Layout>
                <RecordsPage/>
            </Layout>
        </RequireSession>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_cover_both_pages() {
        assert!(ROUTE_PATHS.contains(&"/converter"));
        assert!(ROUTE_PATHS.contains(&"/records"));
    }

    #[test]
    fn public_and_protected_partition_the_routes() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        assert!(public.is_disjoint(&protected));
        let mut union = public.clone();
        union.extend(&protected);
        assert_eq!(union, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
