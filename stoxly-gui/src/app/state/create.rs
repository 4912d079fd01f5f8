use std::sync::Arc;

use iced::{Alignment, Length, Task};

use stoxly_ui::{
    component::{button, form, notification, text::*},
    theme,
    widget::*,
};

use crate::app::{
    error::Error,
    menu::Menu,
    message::Message,
    state::State,
    view::{self, CreateMessage},
};
use crate::services::api::{Inventory, Item, ItemPayload};

const BOTH_FIELDS_REQUIRED: &str = "Please enter both item name and quantity";

/// The Create tab: add or edit an item, with the full stock listed below
/// the form.
pub struct CreatePanel {
    name: form::Value<String>,
    stock: form::Value<String>,
    editing: Option<u64>,
    items: Vec<Item>,
    processing: bool,
    warning: Option<Error>,
    error: Option<&'static str>,
    notification: Option<String>,
}

impl CreatePanel {
    pub fn new() -> Self {
        Self {
            name: form::Value::default(),
            stock: form::Value::default(),
            editing: None,
            items: Vec::new(),
            processing: false,
            warning: None,
            error: None,
            notification: None,
        }
    }

    /// Enter editing mode with the fields of an existing item.
    pub fn prefill(&mut self, item: Item) {
        self.editing = Some(item.id);
        self.name.value = item.name;
        self.name.valid = true;
        self.stock.value = item.stock.to_string();
        self.stock.valid = true;
        self.error = None;
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn form_values(&self) -> (&str, &str) {
        (&self.name.value, &self.stock.value)
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.name = form::Value::default();
        self.stock = form::Value::default();
    }

    fn submit(&mut self, api: Arc<dyn Inventory + Sync + Send>) -> Task<Message> {
        let stock = match self.stock.value.parse::<u32>() {
            Ok(stock) if !self.name.value.trim().is_empty() => stock,
            _ => {
                self.error = Some(BOTH_FIELDS_REQUIRED);
                return Task::none();
            }
        };
        let payload = ItemPayload {
            id: self.editing,
            name: self.name.value.clone(),
            stock,
        };
        self.processing = true;
        self.error = None;
        self.warning = None;
        Task::perform(async move { api.upsert_item(payload).await }, Message::Upserted)
    }
}

impl Default for CreatePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl State for CreatePanel {
    fn view(&self) -> Element<'_, view::Message> {
        let submit_label = if self.is_editing() {
            "EDIT ITEM"
        } else {
            "ADD ITEM"
        };
        let mut form_column = Column::new()
            .spacing(10)
            .push(
                form::Form::new("Enter an Item...", &self.name, |value| {
                    view::Message::Create(CreateMessage::NameEdited(value))
                })
                .size(BODY_SIZE)
                .padding(10),
            )
            .push(
                form::Form::new_digits("Enter Stock Amount...", &self.stock, |value| {
                    view::Message::Create(CreateMessage::StockEdited(value))
                })
                .size(BODY_SIZE)
                .padding(10),
            )
            .push_maybe(
                self.error
                    .map(|message| caption(message).style(theme::text::warning)),
            )
            .push(
                button::primary(submit_label)
                    .width(Length::Fill)
                    .on_press_maybe(if self.processing {
                        None
                    } else {
                        Some(view::Message::Create(CreateMessage::Submit))
                    }),
            );
        if self.is_editing() {
            form_column = form_column.push(
                Container::new(
                    button::alert("BACK")
                        .width(Length::Fixed(120.0))
                        .on_press(view::Message::Create(CreateMessage::Back)),
                )
                .align_x(Alignment::End)
                .width(Length::Fill),
            );
        }
        if let Some(message) = &self.notification {
            form_column = form_column.push(
                Button::new(notification::success(message.clone()))
                    .style(theme::button::transparent)
                    .on_press(view::Message::Create(CreateMessage::CloseNotification))
                    .width(Length::Fill),
            );
        }

        let mut list = Column::new().spacing(10);
        for item in &self.items {
            let actions = Row::new()
                .spacing(10)
                .align_y(Alignment::Center)
                .push(
                    button::link("Edit")
                        .on_press(view::Message::Create(CreateMessage::Edit(item.clone()))),
                )
                .push(
                    button::link("Delete")
                        .on_press(view::Message::Create(CreateMessage::Delete(item.id))),
                );
            list = list.push(view::item_row(item, Some(actions)));
        }

        view::dashboard(
            &Menu::Create,
            self.warning.as_ref(),
            Column::new()
                .spacing(16)
                .push(form_column)
                .push(subheading("All Items in the Stock"))
                .push(list),
        )
    }

    fn update(
        &mut self,
        api: Arc<dyn Inventory + Sync + Send>,
        message: Message,
    ) -> Task<Message> {
        match message {
            Message::View(view::Message::Create(message)) => match message {
                CreateMessage::NameEdited(value) => {
                    self.name.value = value;
                    self.error = None;
                }
                CreateMessage::StockEdited(value) => {
                    self.stock.value = value;
                    self.error = None;
                }
                CreateMessage::Submit => return self.submit(api),
                CreateMessage::Back => self.reset_form(),
                CreateMessage::Edit(item) => self.prefill(item),
                CreateMessage::Delete(id) => {
                    self.warning = None;
                    return Task::perform(
                        async move { api.delete_item(id).await },
                        Message::Deleted,
                    );
                }
                CreateMessage::CloseNotification => self.notification = None,
            },
            Message::View(view::Message::CloseWarning) => {
                self.warning = None;
            }
            Message::Upserted(res) => {
                self.processing = false;
                match res {
                    Ok(response) if response.is_success() => {
                        self.notification = response.message;
                        if !self.is_editing() {
                            self.name = form::Value::default();
                            self.stock = form::Value::default();
                        }
                        return self.reload(api);
                    }
                    Ok(response) => {
                        self.warning = Some(Error::Unexpected(
                            response
                                .message
                                .unwrap_or_else(|| "Something went wrong".to_string()),
                        ));
                    }
                    Err(e) => self.warning = Some(e.into()),
                }
            }
            Message::Deleted(res) => match res {
                Ok(_) => return self.reload(api),
                Err(e) => self.warning = Some(e.into()),
            },
            Message::Items(res) => match res {
                Ok(items) => self.items = items,
                Err(e) => self.warning = Some(e.into()),
            },
            _ => {}
        }
        Task::none()
    }

    fn reload(&mut self, api: Arc<dyn Inventory + Sync + Send>) -> Task<Message> {
        Task::perform(async move { api.list_items().await }, Message::Items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::items::tests::FakeApi;
    use crate::utils::sandbox::Sandbox;

    fn stock() -> Vec<Item> {
        vec![Item {
            id: 1,
            name: "Wheat".to_string(),
            stock: 5,
        }]
    }

    struct Harness {
        api: Arc<FakeApi>,
        panel: CreatePanel,
    }

    impl crate::utils::sandbox::Updateable for Harness {
        type Message = Message;
        fn update(&mut self, message: Message) -> Task<Message> {
            self.panel.update(self.api.clone(), message)
        }
    }

    fn harness(items: Vec<Item>) -> Sandbox<Harness> {
        Sandbox::new(Harness {
            api: FakeApi::with_items(items),
            panel: CreatePanel::new(),
        })
    }

    #[tokio::test]
    async fn submit_requires_both_fields() {
        let mut sandbox = harness(vec![]);

        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Submit)))
            .await;
        assert_eq!(sandbox.state().panel.error(), Some(BOTH_FIELDS_REQUIRED));
        assert!(sandbox.state().api.items.lock().unwrap().is_empty());

        sandbox
            .update(Message::View(view::Message::Create(
                CreateMessage::NameEdited("Barley".to_string()),
            )))
            .await;
        // Editing a field dismisses the error.
        assert_eq!(sandbox.state().panel.error(), None);
        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Submit)))
            .await;
        assert_eq!(sandbox.state().panel.error(), Some(BOTH_FIELDS_REQUIRED));
        assert!(sandbox.state().api.items.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_clears_inputs_and_refetches() {
        let mut sandbox = harness(vec![]);

        for message in [
            CreateMessage::NameEdited("Barley".to_string()),
            CreateMessage::StockEdited("12".to_string()),
            CreateMessage::Submit,
        ] {
            sandbox
                .update(Message::View(view::Message::Create(message)))
                .await;
        }

        let panel = &sandbox.state().panel;
        assert_eq!(panel.form_values(), ("", ""));
        assert_eq!(panel.notification(), Some("Item saved"));
        assert_eq!(panel.items.len(), 1);
        assert_eq!(panel.items[0].name, "Barley");
    }

    #[tokio::test]
    async fn edit_keeps_editing_mode_and_inputs() {
        let mut sandbox = harness(stock());

        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Edit(
                Item {
                    id: 1,
                    name: "Wheat".to_string(),
                    stock: 5,
                },
            ))))
            .await;
        assert!(sandbox.state().panel.is_editing());
        assert_eq!(sandbox.state().panel.form_values(), ("Wheat", "5"));

        for message in [
            CreateMessage::StockEdited("15".to_string()),
            CreateMessage::Submit,
        ] {
            sandbox
                .update(Message::View(view::Message::Create(message)))
                .await;
        }

        let panel = &sandbox.state().panel;
        // Still in editing mode, inputs kept.
        assert!(panel.is_editing());
        assert_eq!(panel.form_values(), ("Wheat", "15"));
        assert_eq!(
            sandbox.state().api.items.lock().unwrap()[0].stock,
            15
        );
    }

    #[tokio::test]
    async fn back_resets_the_form() {
        let mut sandbox = harness(stock());

        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Edit(
                Item {
                    id: 1,
                    name: "Wheat".to_string(),
                    stock: 5,
                },
            ))))
            .await;
        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Back)))
            .await;

        let panel = &sandbox.state().panel;
        assert!(!panel.is_editing());
        assert_eq!(panel.form_values(), ("", ""));
    }

    #[tokio::test]
    async fn delete_refetches_the_list() {
        let mut sandbox = harness(stock());

        sandbox
            .update(Message::View(view::Message::Create(CreateMessage::Delete(
                1,
            ))))
            .await;
        assert!(sandbox.state().api.items.lock().unwrap().is_empty());
        assert!(sandbox.state().panel.items.is_empty());
    }
}
