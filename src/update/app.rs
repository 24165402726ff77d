//! App message handlers (window events, resize notifications)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(scale_factor) => {
            if !scale_factor.is_finite() || scale_factor <= 0.0 {
                tracing::warn!("Ignoring scale factor {}", scale_factor);
                return None;
            }
            model.scale_factor = scale_factor;
            Some(Cmd::Redraw)
        }

        AppMsg::PanelsResized(widths) => {
            tracing::debug!("Panels resized: {:?}", widths);
            let title = window_title(&widths);
            model.reported_widths = widths;
            Some(Cmd::SetTitle(title))
        }
    }
}

/// Window title listing the panel widths, e.g. `panesplit - 35.0% | 65.0%`
pub fn window_title(widths: &[f64]) -> String {
    let parts: Vec<String> = widths.iter().map(|w| format!("{:.1}%", w)).collect();
    format!("panesplit - {}", parts.join(" | "))
}
