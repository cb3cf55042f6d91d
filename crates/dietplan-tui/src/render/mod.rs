//! Main render/view function (View in TEA pattern)


use std::time::Instant;

use dietplan_app::{AppState, Route};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    view_at(frame, state, Instant::now())
}

/// [`view`] with animations sampled at `now`
pub fn view_at(frame: &mut Frame, state: &AppState, now: Instant) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let route = state.navigator.current();

    let header = widgets::MainHeader::new(route.name().title()).with_backend(&state.backend_url);
    frame.render_widget(header, areas.header);

    match route {
        Route::Home => {
            frame.render_widget(widgets::ProfileFormView::new(&state.form), areas.content);
        }
        Route::DietResult(plan_view) => {
            frame.render_widget(widgets::PlanCards::new(plan_view, now), areas.content);
        }
        Route::Nutrition(nutrition) => {
            frame.render_widget(widgets::NutritionView::new(nutrition), areas.content);
        }
    }

    frame.render_widget(widgets::KeyHints::for_state(state), areas.hints);

    // Overlays, topmost last
    if let Route::Nutrition(nutrition) = route {
        if nutrition.popup.visible {
            let popup = widgets::NutritionPopup::new(nutrition.result.as_ref())
                .scroll(nutrition.popup.scroll)
                .opacity(nutrition.popup.opacity_at(now));
            frame.render_widget(popup, area);
        }
    }

    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert), area);
    }
}
