use crate::types::WidgetType;

pub const WIDGET_BASE_URL: &str = "https://widget.kkbox.com/v1/";

/// Builds the embeddable player URL for a resource. No request is made.
///
/// ```
/// use kkbox_sdk::{kkbox::widget::widget_uri, types::WidgetType};
///
/// assert_eq!(
///     widget_uri("KpnEGVHEsGgkoB0MBk", WidgetType::Song),
///     "https://widget.kkbox.com/v1/?id=KpnEGVHEsGgkoB0MBk&type=song"
/// );
/// ```
pub fn widget_uri(id: &str, widget_type: WidgetType) -> String {
    format!(
        "{base}?id={id}&type={widget_type}",
        base = WIDGET_BASE_URL,
        id = id,
        widget_type = widget_type
    )
}
