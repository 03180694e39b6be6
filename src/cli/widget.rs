use crate::{kkbox::widget::widget_uri, types::WidgetType};

pub fn widget(id: &str, widget_type: WidgetType) {
    println!("{}", widget_uri(id, widget_type));
}
