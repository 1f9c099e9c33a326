//! Fixed bootstrap dataset for the local cache, newest-first. Used on first
//! run and whenever the cached payload cannot be parsed.

use crate::models::{Ad, AdId, Condition, Seller};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid seed timestamp")
}

fn seller(name: &str, member_since: &str, phone: &str) -> Seller {
    Seller {
        name: name.to_string(),
        member_since: member_since.to_string(),
        phone: phone.to_string(),
        user_id: None,
    }
}

/// The seed collection. Ordered newest-first, like every collection the
/// cache stores.
pub fn seed_ads() -> Vec<Ad> {
    vec![
        Ad {
            id: AdId::Local(6),
            title: "iPhone 13 Pro 256GB".to_string(),
            price: 185000.0,
            category: "electronics".to_string(),
            condition: Condition::LikeNew,
            description: "Single owner, battery health 91%, box and charger included."
                .to_string(),
            location: "Karachi".to_string(),
            posted: "2 hours ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=iPhone+13+Pro".to_string()],
            seller: seller("Hamza Qureshi", "2022", "0301-2345678"),
            created_at: at(2025, 8, 20, 9, 15),
        },
        Ad {
            id: AdId::Local(5),
            title: "Honda CD 70 2021".to_string(),
            price: 92000.0,
            category: "vehicles".to_string(),
            condition: Condition::Good,
            description: "28,000 km driven, regularly serviced, new tyres fitted last month."
                .to_string(),
            location: "Lahore".to_string(),
            posted: "1 day ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=Honda+CD+70".to_string()],
            seller: seller("Usman Tariq", "2020", "0333-9876543"),
            created_at: at(2025, 8, 19, 14, 40),
        },
        Ad {
            id: AdId::Local(4),
            title: "Wooden dining table with 6 chairs".to_string(),
            price: 45000.0,
            category: "furniture".to_string(),
            condition: Condition::Used,
            description: "Solid sheesham wood, minor scratches on two chairs.".to_string(),
            location: "Islamabad".to_string(),
            posted: "3 days ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=Dining+Table".to_string()],
            seller: seller("Ayesha Malik", "2023", "0321-5551234"),
            created_at: at(2025, 8, 17, 18, 5),
        },
        Ad {
            id: AdId::Local(3),
            title: "HP EliteBook 840 G8".to_string(),
            price: 135000.0,
            category: "electronics".to_string(),
            condition: Condition::Used,
            description: "i5 11th gen, 16GB RAM, 512GB SSD. Ideal for office work.".to_string(),
            location: "Karachi".to_string(),
            posted: "5 days ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=HP+EliteBook".to_string()],
            seller: seller("Bilal Ahmed", "2021", "0345-1112223"),
            created_at: at(2025, 8, 15, 11, 30),
        },
        Ad {
            id: AdId::Local(2),
            title: "Mountain bike 26 inch".to_string(),
            price: 0.0,
            category: "sports".to_string(),
            condition: Condition::Fair,
            description: "Needs a new chain, frame is solid. Price negotiable, contact for details."
                .to_string(),
            location: "Rawalpindi".to_string(),
            posted: "1 week ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=Mountain+Bike".to_string()],
            seller: seller("Danish Raza", "2024", "0312-7778889"),
            created_at: at(2025, 8, 13, 8, 0),
        },
        Ad {
            id: AdId::Local(1),
            title: "Leather office chair".to_string(),
            price: 18500.0,
            category: "furniture".to_string(),
            condition: Condition::New,
            description: "Brand new, still in packaging. Bought two by mistake.".to_string(),
            location: "Lahore".to_string(),
            posted: "1 week ago".to_string(),
            images: vec!["https://via.placeholder.com/400x300?text=Office+Chair".to_string()],
            seller: seller("Sana Iqbal", "2022", "0300-4445556"),
            created_at: at(2025, 8, 12, 16, 20),
        },
    ]
}
