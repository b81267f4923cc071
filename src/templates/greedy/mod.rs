//! Exchange-argument greedy choices.

mod bulbs;
mod card_string;
mod digit_product;
mod election;
mod level_scores;
mod stock_profit;
mod sugar_delivery;
mod treasure;

pub use bulbs::Bulbs;
pub use card_string::CardString;
pub use digit_product::DigitProduct;
pub use election::Election;
pub use level_scores::LevelScores;
pub use stock_profit::StockProfit;
pub use sugar_delivery::SugarDelivery;
pub use treasure::Treasure;

use crate::traits::DynTemplate;

pub(crate) fn templates() -> Vec<Box<dyn DynTemplate>> {
    vec![
        Box::new(Treasure),
        Box::new(LevelScores),
        Box::new(Election),
        Box::new(StockProfit),
        Box::new(CardString),
        Box::new(Bulbs),
        Box::new(DigitProduct),
        Box::new(SugarDelivery),
    ]
}
