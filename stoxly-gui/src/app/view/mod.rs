use iced::{Alignment, Length};

use stoxly_ui::{
    component::{button, notification, text::*},
    theme,
    widget::*,
};

use crate::app::{error::Error, menu::Menu};
use crate::services::api::Item;

#[derive(Debug, Clone)]
pub enum Message {
    Menu(Menu),
    CloseWarning,
    Items(ItemsMessage),
    Create(CreateMessage),
}

#[derive(Debug, Clone)]
pub enum ItemsMessage {
    Delete(u64),
}

#[derive(Debug, Clone)]
pub enum CreateMessage {
    NameEdited(String),
    StockEdited(String),
    Submit,
    Back,
    Edit(Item),
    Delete(u64),
    CloseNotification,
}

/// Common layout of the dashboard panels: the tab row, an optional warning
/// banner, and the panel content.
pub fn dashboard<'a, T: Into<Element<'a, Message>>>(
    menu: &Menu,
    warning: Option<&Error>,
    content: T,
) -> Element<'a, Message> {
    Column::new()
        .push(tabs(menu))
        .push_maybe(warning.map(warn))
        .push(
            Container::new(
                Scrollable::new(
                    Container::new(content.into())
                        .padding(16)
                        .max_width(800)
                        .width(Length::Fill),
                )
                .height(Length::Fill),
            )
            .center_x(Length::Fill)
            .style(theme::container::background)
            .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn tabs<'a>(menu: &Menu) -> Element<'a, Message> {
    let tab = |label: &'static str, target: Menu, active: bool| {
        if active {
            button::menu_active(label)
        } else {
            button::menu(label)
        }
        .width(Length::FillPortion(1))
        .on_press(Message::Menu(target))
    };
    Container::new(
        Row::new()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(tab(
                "All Items",
                Menu::AllItems,
                *menu == Menu::AllItems,
            ))
            .push(tab("Low Stock", Menu::LowStock, *menu == Menu::LowStock))
            .push(tab(
                "Create",
                Menu::Create,
                matches!(menu, Menu::Create | Menu::CreatePreFilled(_)),
            )),
    )
    .padding(10)
    .width(Length::Fill)
    .style(theme::container::foreground)
    .into()
}

fn warn<'a>(error: &Error) -> Element<'a, Message> {
    Button::new(notification::warning(
        "Something went wrong".to_string(),
        error.to_string(),
    ))
    .style(theme::button::transparent)
    .on_press(Message::CloseWarning)
    .width(Length::Fill)
    .into()
}

/// A two-column item row, tinted by its stock level.
pub fn item_row<'a>(item: &Item, actions: Option<Row<'a, Message>>) -> Element<'a, Message> {
    let mut right = Row::new()
        .spacing(25)
        .align_y(Alignment::Center)
        .push(label(format!("{}kg", item.stock)));
    if let Some(actions) = actions {
        right = right.push(actions);
    }
    Container::new(
        Row::new()
            .align_y(Alignment::Center)
            .push(label(item.name.clone()).width(Length::Fill))
            .push(right),
    )
    .padding(10)
    .width(Length::Fill)
    .style(if item.is_low_stock() {
        theme::card::stock_low
    } else {
        theme::card::stock_ok
    })
    .into()
}
