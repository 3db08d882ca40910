// SPDX-License-Identifier: MPL-2.0
//! Contact section: contact details, social links, the message form and the
//! page footer.
//!
//! Submission is simulated: the form shows a sending state for
//! [`SUBMIT_DELAY`], logs the message, then clears itself.

use super::{section_header, Message as PageMessage};
use crate::content::Contact;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_editor, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Task};
use std::time::Duration;

/// How long a simulated submission takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageEdited(text_editor::Action),
    Submit,
    Sent,
}

/// Outcome of a form message the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Sent,
}

/// What the form holds at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Accepts `local@domain` with both parts non-empty and no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Default)]
pub struct Form {
    name: String,
    email: String,
    subject: String,
    message: text_editor::Content,
    sending: bool,
}

impl Form {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// The current field values, trimmed.
    #[must_use]
    pub fn submission(&self) -> Submission {
        Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.text().trim().to_string(),
        }
    }

    /// Every field is filled and the email looks like one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let submission = self.submission();
        !submission.name.is_empty()
            && !submission.subject.is_empty()
            && !submission.message.is_empty()
            && is_valid_email(&submission.email)
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message = text_editor::Content::new();
    }

    pub fn update(&mut self, message: Message) -> (Event, Task<Message>) {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::SubjectChanged(value) => self.subject = value,
            Message::MessageEdited(action) => self.message.perform(action),
            Message::Submit => {
                if self.sending || !self.is_valid() {
                    return (Event::None, Task::none());
                }
                self.sending = true;
                let submission = self.submission();
                tracing::info!(
                    name = %submission.name,
                    email = %submission.email,
                    subject = %submission.subject,
                    length = submission.message.chars().count(),
                    "contact form submitted"
                );
                return (
                    Event::None,
                    Task::perform(
                        async { tokio::time::sleep(SUBMIT_DELAY).await },
                        |()| Message::Sent,
                    ),
                );
            }
            Message::Sent => {
                if !self.sending {
                    return (Event::None, Task::none());
                }
                self.sending = false;
                self.clear();
                tracing::debug!("contact form sent");
                return (Event::Sent, Task::none());
            }
        }
        (Event::None, Task::none())
    }

    fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let editable = !self.sending;
        let input = |placeholder: String,
                     value: &'a str,
                     on_input: fn(String) -> Message|
         -> text_input::TextInput<'a, Message> {
            let field = text_input(&placeholder, value)
                .padding(spacing::SM)
                .size(typography::BODY)
                .width(Length::Fill);
            if editable {
                field.on_input(on_input)
            } else {
                field
            }
        };

        let names = Row::new()
            .spacing(spacing::MD)
            .push(input(i18n.tr("contact-name-placeholder"), &self.name, Message::NameChanged))
            .push(input(i18n.tr("contact-email-placeholder"), &self.email, Message::EmailChanged));

        let mut body = text_editor(&self.message)
            .placeholder(i18n.tr("contact-message-placeholder"))
            .padding(spacing::SM)
            .size(typography::BODY)
            .height(Length::Fixed(sizing::TEXTAREA_HEIGHT));
        if editable {
            body = body.on_action(Message::MessageEdited);
        }

        let label = if self.sending {
            i18n.tr("contact-sending")
        } else {
            i18n.tr("contact-send")
        };
        let send = button(
            Text::new(label)
                .size(typography::BODY)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::gradient)
        .on_press_maybe((editable && self.is_valid()).then_some(Message::Submit));

        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(i18n.tr("contact-form-title"))
                    .size(typography::TITLE_MD)
                    .style(styles::text::primary),
            )
            .push(names)
            .push(input(
                i18n.tr("contact-subject-placeholder"),
                &self.subject,
                Message::SubjectChanged,
            ))
            .push(body)
            .push(send)
            .into()
    }
}

pub fn view<'a>(
    contact: &'a Contact,
    form: &'a Form,
    owner_name: &'a str,
    i18n: &'a I18n,
) -> Element<'a, PageMessage> {
    let intro = (!contact.intro.is_empty()).then_some(contact.intro.as_str());

    let entries = contact
        .entries
        .iter()
        .fold(Column::new().spacing(spacing::MD), |column, entry| {
            let details = Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(entry.label.as_str())
                        .size(typography::BODY_SM)
                        .style(styles::text::muted),
                )
                .push(
                    Text::new(entry.value.as_str())
                        .size(typography::BODY)
                        .style(styles::text::primary),
                );
            column.push(
                button(details)
                    .on_press(PageMessage::CopyLink(entry.href.clone()))
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::button::ghost),
            )
        });

    let social = contact
        .social
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, link| {
            row.push(
                button(Text::new(link.label.as_str()).size(typography::BODY_SM))
                    .on_press(PageMessage::CopyLink(Some(link.href.clone())))
                    .padding([spacing::XS, spacing::MD])
                    .style(styles::button::ghost),
            )
        });

    let details = Column::new()
        .spacing(spacing::LG)
        .width(Length::FillPortion(1))
        .push(
            Text::new(i18n.tr("contact-get-in-touch"))
                .size(typography::TITLE_MD)
                .style(styles::text::primary),
        )
        .push(
            Text::new(contact.blurb.as_str())
                .size(typography::BODY_LG)
                .style(styles::text::muted),
        )
        .push(entries)
        .push(
            Text::new(i18n.tr("contact-follow"))
                .size(typography::TITLE_SM)
                .style(styles::text::primary),
        )
        .push(social);

    let form = Container::new(form.view(i18n).map(PageMessage::Contact))
        .width(Length::FillPortion(1))
        .padding(spacing::XL)
        .style(styles::container::card);

    let footer = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(
            Text::new(i18n.tr_with_args("footer-text", &[("name", owner_name)]))
                .size(typography::BODY_SM)
                .style(styles::text::muted),
        )
        .push(Text::new("|").size(typography::BODY_SM).style(styles::text::muted))
        .push(
            button(Text::new(i18n.tr("footer-docs")).size(typography::BODY_SM))
                .on_press(PageMessage::OpenDocumentation)
                .padding(0)
                .style(styles::button::link),
        );

    Column::new()
        .spacing(spacing::XXL)
        .align_x(alignment::Horizontal::Center)
        .push(section_header(i18n.tr("contact-title"), intro))
        .push(Row::new().spacing(spacing::XXL).push(details).push(form))
        .push(footer)
        .into()
}
