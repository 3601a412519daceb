//! Root Application Component
//!
//! This module contains the main App component that sets up routing and
//! the page layout around the catalog dashboard.

use leptos::*;
use leptos_router::*;

use crate::components::dashboard::Dashboard;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main class="min-h-screen bg-theme-bg text-theme">
                <Routes>
                    // Dashboard (home)
                    <Route path="/" view=Dashboard />

                    // Catch-all for 404
                    <Route path="/*" view=NotFoundPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex-1 flex items-center justify-center p-6">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-theme-muted mb-4">"404"</h1>
                <p class="text-xl text-theme-secondary mb-6">"Page not found"</p>
                <a href="/" class="btn-primary">"Go to Dashboard"</a>
            </div>
        </div>
    }
}
