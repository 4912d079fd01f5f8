mod create;
pub(crate) mod items;

use std::sync::Arc;

use iced::Task;

use stoxly_ui::widget::*;

use super::{message::Message, view};
use crate::services::api::Inventory;

pub use create::CreatePanel;
pub use items::ItemsPanel;

pub trait State {
    fn view(&self) -> Element<'_, view::Message>;
    fn update(
        &mut self,
        _api: Arc<dyn Inventory + Sync + Send>,
        _message: Message,
    ) -> Task<Message> {
        Task::none()
    }
    /// Called when the panel becomes the current one.
    fn reload(&mut self, _api: Arc<dyn Inventory + Sync + Send>) -> Task<Message> {
        Task::none()
    }
}
