//! Response bank: canned replies per intent category

use aurora_ivr_core::IntentCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::DomainConfigError;

/// Candidate replies per actionable category
///
/// Selection among an intent's candidates is uniform at random and is
/// done by the caller; the bank itself is static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseBank {
    responses: HashMap<IntentCategory, Vec<String>>,
}

impl ResponseBank {
    pub fn new(responses: HashMap<IntentCategory, Vec<String>>) -> Self {
        Self { responses }
    }

    /// Candidates for `category`, in declaration order
    pub fn candidates(&self, category: IntentCategory) -> &[String] {
        self.responses
            .get(&category)
            .map(|r| r.as_slice())
            .unwrap_or(&[])
    }

    /// Every actionable category must have at least one non-empty reply
    pub fn validate(&self) -> Result<(), DomainConfigError> {
        for category in IntentCategory::ACTIONABLE {
            let usable = self
                .candidates(category)
                .iter()
                .any(|r| !r.trim().is_empty());
            if !usable {
                return Err(DomainConfigError::Invalid(format!(
                    "response bank has no replies for '{}'",
                    category
                )));
            }
        }
        Ok(())
    }
}

impl Default for ResponseBank {
    fn default() -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            IntentCategory::Booking,
            vec![
                "Sure thing! To book a flight, you'll need to provide information such as your travel dates, destination, and number of passengers. You can do this on our website or by speaking with one of our customer service representatives.".to_string(),
                "Of course! I'd be happy to help you book a flight. Can you please provide me with your travel dates and destination?".to_string(),
                "Absolutely! To get started with booking a flight, we'll need some basic information from you such as your departure city, arrival city, and travel dates. You can provide this information online or over the phone with one of our agents.".to_string(),
            ],
        );
        responses.insert(
            IntentCategory::FlightStatus,
            vec![
                "To check the status of a flight, you can visit our website and enter the flight number and date. You can also sign up for flight status notifications to receive updates via text or email.".to_string(),
                "If you'd like to know the status of a flight, I can help you with that. Please provide me with the flight number and date, and I'll do my best to provide you with the most up-to-date information.".to_string(),
                "Checking the status of a flight is easy! Just head to our website and enter the flight number and date. You can also call our customer service hotline for real-time updates.".to_string(),
            ],
        );
        responses.insert(
            IntentCategory::GeneralInformation,
            vec![
                "If you have general questions about our airline or policies, you can find a wealth of information on our website. There, you'll find details about our routes, baggage policies, pet policies, and more.".to_string(),
                "For general inquiries about our airline, I'd recommend checking out our website. There, you'll find a comprehensive FAQ section as well as contact information for our customer service team.".to_string(),
                "If you're looking for information about our airline's policies or services, our website is a great resource. There, you'll find details about everything from in-flight amenities to special accommodations for passengers with disabilities.".to_string(),
            ],
        );
        responses.insert(
            IntentCategory::FrequentFlyer,
            vec![
                "If you're a frequent flyer with our airline, you may be eligible for special perks and benefits. To learn more about our frequent flyer program, including how to enroll and earn miles, visit our website or speak with one of our customer service representatives.".to_string(),
                "As a frequent flyer with our airline, you may be able to take advantage of perks such as priority boarding, free checked bags, and access to our exclusive lounges. To learn more about our program and how to earn miles, visit our website or give us a call.".to_string(),
                "Our frequent flyer program is designed to reward our loyal customers with perks and benefits that make travel more enjoyable. To learn more about the program and how to enroll, I'd recommend visiting our website or speaking with one of our customer service agents.".to_string(),
            ],
        );
        responses.insert(
            IntentCategory::BaggageInformation,
            vec![
                "If you have questions about our baggage policies, including carry-on and checked baggage allowances, you can find that information on our website. There, you'll also find details about fees for excess or oversized baggage.".to_string(),
                "Our baggage policies vary depending on factors such as your destination and fare class. To learn more about what you're allowed to bring on board and what fees may apply, I'd recommend checking out our website or speaking with one of our customer service representatives.".to_string(),
                "For information about our baggage policies, including carry-on and checked baggage allowances, fees, and restrictions, visit our website. There, you'll find everything you need to know to ensure a smooth and hassle-free travel experience.".to_string(),
            ],
        );
        Self { responses }
    }
}
