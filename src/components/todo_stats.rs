//! Total / completed / remaining counters under the list.

use leptos::prelude::*;

use crate::state::todos::TodoStats;

#[component]
pub fn TodoStatsRow(stats: Signal<TodoStats>) -> impl IntoView {
    view! {
        <div class="stats-row">
            <div class="stats-card">
                <h3>{move || stats.get().total}</h3>
                <p class="text-muted">"Total Todos"</p>
            </div>
            <div class="stats-card">
                <h3 class="text-success">{move || stats.get().completed}</h3>
                <p class="text-muted">"Completed"</p>
            </div>
            <div class="stats-card">
                <h3 class="text-primary">{move || stats.get().remaining}</h3>
                <p class="text-muted">"Remaining"</p>
            </div>
        </div>
    }
}
