use std::sync::Arc;

use iced::{Alignment, Length, Task};

use stoxly_ui::{
    component::{button, text::*},
    theme,
    widget::*,
};

use crate::app::{
    error::Error,
    menu::Menu,
    message::Message,
    state::State,
    view::{self, ItemsMessage},
};
use crate::services::api::{Inventory, Item};

/// Read-only item list, shared by the All Items and Low Stock tabs.
pub struct ItemsPanel {
    low_stock_only: bool,
    items: Vec<Item>,
    loading: bool,
    warning: Option<Error>,
}

impl ItemsPanel {
    pub fn new(low_stock_only: bool) -> Self {
        Self {
            low_stock_only,
            items: Vec::new(),
            loading: false,
            warning: None,
        }
    }

    fn menu(&self) -> Menu {
        if self.low_stock_only {
            Menu::LowStock
        } else {
            Menu::AllItems
        }
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| !self.low_stock_only || item.is_low_stock())
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn warning(&self) -> Option<&Error> {
        self.warning.as_ref()
    }
}

impl State for ItemsPanel {
    fn view(&self) -> Element<'_, view::Message> {
        let mut list = Column::new().spacing(10);
        if self.loading {
            list = list.push(body("Loading...").style(theme::text::secondary));
        } else {
            let mut empty = true;
            for item in self.items() {
                empty = false;
                let actions = Row::new()
                    .spacing(10)
                    .align_y(Alignment::Center)
                    .push(
                        button::link("Edit")
                            .on_press(view::Message::Menu(Menu::CreatePreFilled(item.clone()))),
                    )
                    .push(
                        button::link("Delete")
                            .on_press(view::Message::Items(ItemsMessage::Delete(item.id))),
                    );
                list = list.push(view::item_row(item, Some(actions)));
            }
            if empty {
                list = list.push(
                    body(if self.low_stock_only {
                        "No item is running low on stock"
                    } else {
                        "No item in the stock yet"
                    })
                    .style(theme::text::secondary),
                );
            }
        }

        view::dashboard(
            &self.menu(),
            self.warning.as_ref(),
            Column::new()
                .spacing(16)
                .push(
                    subheading(if self.low_stock_only {
                        "Low Stock"
                    } else {
                        "All Items in the Stock"
                    })
                    .width(Length::Fill),
                )
                .push(list),
        )
    }

    fn update(
        &mut self,
        api: Arc<dyn Inventory + Sync + Send>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::Items(res) => {
                self.loading = false;
                match res {
                    Ok(items) => self.items = items,
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            Message::View(view::Message::CloseWarning) => {
                self.warning = None;
            }
            Message::View(view::Message::Items(ItemsMessage::Delete(id))) => {
                self.warning = None;
                return Task::perform(
                    async move { api.delete_item(id).await },
                    Message::Deleted,
                );
            }
            Message::Deleted(res) => match res {
                Ok(_) => return self.reload(api),
                Err(e) => self.warning = Some(e.into()),
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, api: Arc<dyn Inventory + Sync + Send>) -> Task<Message> {
        self.loading = true;
        self.warning = None;
        Task::perform(async move { api.list_items().await }, Message::Items)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::utils::sandbox::Sandbox;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::services::api::{ApiError, ApiResponse, ItemPayload};

    pub struct FakeApi {
        pub items: Mutex<Vec<Item>>,
    }

    impl FakeApi {
        pub fn with_items(items: Vec<Item>) -> Arc<Self> {
            Arc::new(Self {
                items: Mutex::new(items),
            })
        }
    }

    #[async_trait]
    impl Inventory for FakeApi {
        async fn list_items(&self) -> Result<Vec<Item>, ApiError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn upsert_item(&self, payload: ItemPayload) -> Result<ApiResponse<Item>, ApiError> {
            let mut items = self.items.lock().unwrap();
            let item = match payload.id {
                Some(id) => {
                    let item = items
                        .iter_mut()
                        .find(|item| item.id == id)
                        .ok_or(ApiError {
                            http_status: Some(404),
                            error: "No such item".to_string(),
                        })?;
                    item.name = payload.name;
                    item.stock = payload.stock;
                    item.clone()
                }
                None => {
                    let id = items.iter().map(|item| item.id).max().unwrap_or(0) + 1;
                    let item = Item {
                        id,
                        name: payload.name,
                        stock: payload.stock,
                    };
                    items.push(item.clone());
                    item
                }
            };
            Ok(ApiResponse {
                status: "SUCCESS".to_string(),
                message: Some("Item saved".to_string()),
                data: Some(item),
            })
        }

        async fn delete_item(&self, id: u64) -> Result<ApiResponse<Item>, ApiError> {
            self.items.lock().unwrap().retain(|item| item.id != id);
            Ok(ApiResponse {
                status: "SUCCESS".to_string(),
                message: Some("Item deleted".to_string()),
                data: None,
            })
        }
    }

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

    struct Harness {
        api: Arc<FakeApi>,
        panel: ItemsPanel,
    }

    impl crate::utils::sandbox::Updateable for Harness {
        type Message = Message;
        fn update(&mut self, message: Message) -> Task<Message> {
            self.panel.update(self.api.clone(), message)
        }
    }

    #[tokio::test]
    async fn reload_fetches_items() {
        let api = FakeApi::with_items(stock());
        let mut panel = ItemsPanel::new(false);
        let task = panel.reload(api.clone());
        assert!(panel.is_loading());

        let mut sandbox = Sandbox::new(Harness { api, panel });
        // Drain the reload task through the update loop.
        if let Some(mut stream) = iced_runtime::task::into_stream(task) {
            use iced::futures::StreamExt;
            while let Some(action) = stream.next().await {
                if let iced_runtime::Action::Output(message) = action {
                    sandbox.update(message).await;
                }
            }
        }
        assert!(!sandbox.state().panel.is_loading());
        assert_eq!(sandbox.state().panel.items().count(), 2);
    }

    #[tokio::test]
    async fn low_stock_filter() {
        let api = FakeApi::with_items(stock());
        let mut panel = ItemsPanel::new(true);
        let items = api.list_items().await.unwrap();
        let _task = panel.update(api.clone(), Message::Items(Ok(items)));

        let low: Vec<_> = panel.items().collect();
        assert_eq!(low.len(), 1);
        assert_eq!(low[0].name, "Wheat");
    }

    #[tokio::test]
    async fn delete_refetches() {
        let api = FakeApi::with_items(stock());
        let items = api.list_items().await.unwrap();
        let mut panel = ItemsPanel::new(false);
        let _task = panel.update(api.clone(), Message::Items(Ok(items)));

        let mut sandbox = Sandbox::new(Harness {
            api: api.clone(),
            panel,
        });
        sandbox
            .update(Message::View(view::Message::Items(ItemsMessage::Delete(1))))
            .await;

        assert_eq!(sandbox.state().panel.items().count(), 1);
        assert_eq!(api.items.lock().unwrap().len(), 1);
    }
}
