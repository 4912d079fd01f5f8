pub mod menu;
pub mod message;
pub mod state;
pub mod view;

mod error;

use std::sync::Arc;

use iced::Task;

use stoxly_ui::widget::Element;

pub use error::Error;
pub use message::Message;

use menu::Menu;
use state::{CreatePanel, ItemsPanel, State};

use crate::services::api::Inventory;

struct Panels {
    current: Menu,
    all_items: ItemsPanel,
    low_stock: ItemsPanel,
    create: CreatePanel,
}

impl Panels {
    fn new() -> Panels {
        Self {
            current: Menu::AllItems,
            all_items: ItemsPanel::new(false),
            low_stock: ItemsPanel::new(true),
            create: CreatePanel::new(),
        }
    }

    fn current(&self) -> &dyn State {
        match self.current {
            Menu::AllItems => &self.all_items,
            Menu::LowStock => &self.low_stock,
            Menu::Create | Menu::CreatePreFilled(_) => &self.create,
        }
    }

    fn current_mut(&mut self) -> &mut dyn State {
        match self.current {
            Menu::AllItems => &mut self.all_items,
            Menu::LowStock => &mut self.low_stock,
            Menu::Create | Menu::CreatePreFilled(_) => &mut self.create,
        }
    }
}

pub struct App {
    api: Arc<dyn Inventory + Sync + Send>,
    panels: Panels,
}

impl App {
    pub fn new(api: Arc<dyn Inventory + Sync + Send>) -> (App, Task<Message>) {
        let mut panels = Panels::new();
        let cmd = panels.all_items.reload(api.clone());
        (Self { api, panels }, cmd)
    }

    pub fn current_menu(&self) -> &Menu {
        &self.panels.current
    }

    fn set_current_panel(&mut self, menu: Menu) -> Task<Message> {
        if let Menu::CreatePreFilled(item) = &menu {
            self.panels.create.prefill(item.clone());
        }
        self.panels.current = menu;
        self.panels.current_mut().reload(self.api.clone())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::Menu(menu)) => self.set_current_panel(menu),
            _ => self
                .panels
                .current_mut()
                .update(self.api.clone(), message),
        }
    }

    pub fn view(&self) -> Element<Message> {
        self.panels.current().view().map(Message::View)
    }
}

impl crate::utils::sandbox::Updateable for App {
    type Message = Message;
    fn update(&mut self, message: Message) -> Task<Message> {
        self.update(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::items::tests::FakeApi;
    use crate::app::view::{self, CreateMessage};
    use crate::services::api::Item;
    use crate::utils::sandbox::Sandbox;

    fn stock() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Wheat".to_string(),
                stock: 5,
            },
            Item {
                id: 2,
                name: "Rice".to_string(),
                stock: 50,
            },
        ]
    }

    #[tokio::test]
    async fn edit_from_list_prefills_create_tab() {
        let api = FakeApi::with_items(stock());
        let (app, task) = App::new(api);
        let mut sandbox = Sandbox::new(app);
        if let Some(mut stream) = iced_runtime::task::into_stream(task) {
            use iced::futures::StreamExt;
            while let Some(action) = stream.next().await {
                if let iced_runtime::Action::Output(message) = action {
                    sandbox.update(message).await;
                }
            }
        }

        sandbox
            .update(Message::View(view::Message::Menu(Menu::CreatePreFilled(
                Item {
                    id: 2,
                    name: "Rice".to_string(),
                    stock: 50,
                },
            ))))
            .await;

        assert!(matches!(
            sandbox.state().current_menu(),
            Menu::CreatePreFilled(_)
        ));
        assert!(sandbox.state().panels.create.is_editing());
        assert_eq!(
            sandbox.state().panels.create.form_values(),
            ("Rice", "50")
        );

        // Leaving editing mode from the pre-filled tab.
        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Back)))
            .await;
        assert!(!sandbox.state().panels.create.is_editing());
    }

    #[tokio::test]
    async fn switching_tab_refetches() {
        let api = FakeApi::with_items(stock());
        let (app, _task) = App::new(api.clone());
        let mut sandbox = Sandbox::new(app);

        sandbox
            .update(Message::View(view::Message::Menu(Menu::LowStock)))
            .await;
        assert_eq!(*sandbox.state().current_menu(), Menu::LowStock);
        assert_eq!(sandbox.state().panels.low_stock.items().count(), 1);
    }
}
