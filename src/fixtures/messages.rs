//! Message Fixtures
//!
//! Seed data for the NGO messages view. The seeded list is copied into
//! page-local state once the simulated load completes; edits never leave
//! that view and are lost on reload.

use chrono::{NaiveDate, NaiveDateTime};

/// Delivery status of a pickup message
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Draft,
    Pending,
    Sent,
}

impl MessageStatus {
    pub fn label(&self) -> &'static str {
        match self {
            MessageStatus::Draft => "Draft",
            MessageStatus::Pending => "Pending",
            MessageStatus::Sent => "Sent",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MessageStatus::Sent => "bg-green-100 text-green-800",
            MessageStatus::Pending => "bg-yellow-100 text-yellow-800",
            MessageStatus::Draft => "bg-gray-100 text-gray-800",
        }
    }
}

/// A drafted or sent pickup message to an NGO
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Message {
    pub id: u32,
    pub ngo: &'static str,
    pub food: &'static str,
    pub text: String,
    pub status: MessageStatus,
    pub response: Option<&'static str>,
    pub timestamp: NaiveDateTime,
}

fn at(d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 9, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Seeded message threads
pub fn seed_messages() -> Vec<Message> {
    vec![
        Message {
            id: 1,
            ngo: "Food For All",
            food: "Vegetable Biryani (2.5 kg)",
            text: "Hi Food For All! We have 2.5kg of fresh Vegetable Biryani in excellent \
                   condition. It was prepared today at 2:30 PM and needs to be picked up \
                   before 8:30 PM. Our location is 1.2km from you. Would you be able to \
                   collect it? Please reply as soon as possible."
                .to_string(),
            status: MessageStatus::Sent,
            response: Some("We can pick it up at 7:00 PM. Thank you for your donation!"),
            timestamp: at(15, 15, 45),
        },
        Message {
            id: 2,
            ngo: "Community Kitchen",
            food: "Fresh Apples (1.2 kg)",
            text: "Hello Community Kitchen! We have 1.2kg of fresh apples available for \
                   donation. They were purchased yesterday and are in perfect condition. \
                   Would you be interested in collecting them today before 6:00 PM? We're \
                   located 3.5km from your facility."
                .to_string(),
            status: MessageStatus::Draft,
            response: None,
            timestamp: at(15, 14, 30),
        },
        Message {
            id: 3,
            ngo: "Shelter Meals",
            food: "Milk (1 liter)",
            text: "Hi Shelter Meals! We have 1 liter of milk available for donation. It was \
                   opened 2 days ago and has been properly refrigerated. It expires in 5 \
                   days. Would you be able to use this for your morning meals? Please let \
                   us know if you can pick it up today."
                .to_string(),
            status: MessageStatus::Pending,
            response: None,
            timestamp: at(15, 10, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_covers_every_status() {
        let messages = seed_messages();
        assert_eq!(messages.len(), 3);
        assert!(messages.iter().any(|m| m.status == MessageStatus::Sent));
        assert!(messages.iter().any(|m| m.status == MessageStatus::Draft));
        assert!(messages.iter().any(|m| m.status == MessageStatus::Pending));
    }

    #[test]
    fn test_only_sent_messages_carry_a_response() {
        for message in seed_messages() {
            if message.response.is_some() {
                assert_eq!(message.status, MessageStatus::Sent);
            }
        }
    }
}
