use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::domain::order::{
    Address, Coordinates, Customer, ItemOption, Order, OrderId, OrderItem, OrderStatus, Platform,
};

// ============================================================================
// Sample Orders - one per lifecycle stage, across all four platforms
// ============================================================================

fn money(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn item(id: &str, name: &str, quantity: u32, cents: i64) -> OrderItem {
    OrderItem {
        id: id.to_string(),
        name: name.to_string(),
        quantity,
        price: money(cents),
        notes: None,
        options: Vec::new(),
    }
}

fn option(name: &str, value: &str) -> ItemOption {
    ItemOption {
        name: name.to_string(),
        value: value.to_string(),
        price: None,
    }
}

fn customer(name: &str, phone: &str, street: &str, district: &str) -> Customer {
    Customer {
        name: name.to_string(),
        phone: phone.to_string(),
        email: None,
        address: Address {
            street: street.to_string(),
            district: district.to_string(),
            city: "İstanbul".to_string(),
            zip_code: None,
            coordinates: None,
        },
    }
}

struct Draft {
    id: &'static str,
    ticket: &'static str,
    platform: Platform,
    status: OrderStatus,
    customer: Customer,
    items: Vec<OrderItem>,
    total_cents: i64,
    placed_minutes_ago: i64,
    /// Negative when the estimate is already in the past
    delivery_in_minutes: i64,
}

impl Draft {
    fn build(self, now: DateTime<Utc>) -> Order {
        Order {
            id: OrderId::new(self.id),
            order_id: self.ticket.to_string(),
            platform: self.platform,
            status: self.status,
            customer: self.customer,
            items: self.items,
            total_amount: money(self.total_cents),
            order_date: now - Duration::minutes(self.placed_minutes_ago),
            estimated_delivery_time: Some(now + Duration::minutes(self.delivery_in_minutes)),
            notes: None,
        }
    }
}

/// The six demo orders, dated relative to `now`
pub fn sample_orders(now: DateTime<Utc>) -> Vec<Order> {
    let mut first_customer = customer(
        "Ahmet Yılmaz",
        "+90 532 123 45 67",
        "Atatürk Cad. No:123 Daire:5",
        "Kadıköy",
    );
    first_customer.email = Some("ahmet@example.com".to_string());
    first_customer.address.zip_code = Some("34710".to_string());
    first_customer.address.coordinates = Some(Coordinates {
        lat: 40.9925,
        lng: 29.0236,
    });

    let mut pizza = item("1", "Margherita Pizza", 1, 8990);
    pizza.notes = Some("Az soğanlı lütfen".to_string());
    pizza.options = vec![option("Boyut", "Orta"), option("Kenar", "İnce")];

    let mut burger = item("3", "Chicken Burger Menü", 1, 6500);
    burger.options = vec![option("Patates", "Büyük"), option("İçecek", "Fanta")];

    let drafts = vec![
        Draft {
            id: "1",
            ticket: "#YS-12345",
            platform: Platform::Yemeksepeti,
            status: OrderStatus::New,
            customer: first_customer,
            items: vec![pizza, item("2", "Coca Cola 330ml", 2, 1500)],
            total_cents: 11990,
            placed_minutes_ago: 5,
            delivery_in_minutes: 25,
        },
        Draft {
            id: "2",
            ticket: "#GT-67890",
            platform: Platform::Getir,
            status: OrderStatus::Preparing,
            customer: customer("Ayşe Demir", "+90 535 987 65 43", "Çamlık Sok. No:45", "Beşiktaş"),
            items: vec![burger],
            total_cents: 6500,
            placed_minutes_ago: 15,
            delivery_in_minutes: 15,
        },
        Draft {
            id: "3",
            ticket: "#TY-54321",
            platform: Platform::Trendyol,
            status: OrderStatus::Ready,
            customer: customer(
                "Mehmet Kara",
                "+90 538 456 78 90",
                "Yeni Mahalle 12. Sokak No:78",
                "Üsküdar",
            ),
            items: vec![
                item("4", "Karışık Izgara", 1, 14500),
                item("5", "Ayran", 2, 1200),
                item("6", "Baklava (4 adet)", 1, 3500),
            ],
            // Supplied by the platform; differs from the item subtotal
            total_cents: 16900,
            placed_minutes_ago: 35,
            delivery_in_minutes: 5,
        },
        Draft {
            id: "4",
            ticket: "#MG-98765",
            platform: Platform::Migros,
            status: OrderStatus::Delivered,
            customer: customer(
                "Fatma Özkan",
                "+90 542 321 09 87",
                "Güneş Apt. A Blok Daire:12",
                "Şişli",
            ),
            items: vec![item("7", "Penne Arrabbiata", 1, 5500)],
            total_cents: 5500,
            placed_minutes_ago: 65,
            delivery_in_minutes: -35,
        },
        Draft {
            id: "5",
            ticket: "#YS-11223",
            platform: Platform::Yemeksepeti,
            status: OrderStatus::Confirmed,
            customer: customer("Can Şahin", "+90 533 789 12 34", "Merkez Cad. No:234", "Beyoğlu"),
            items: vec![item("8", "Lahmacun", 3, 1800), item("9", "Şalgam", 2, 800)],
            total_cents: 7000,
            placed_minutes_ago: 8,
            delivery_in_minutes: 22,
        },
        Draft {
            id: "6",
            ticket: "#GT-33445",
            platform: Platform::Getir,
            status: OrderStatus::PickedUp,
            customer: customer("Zeynep Aktaş", "+90 544 567 89 01", "Eski Sokak No:67", "Maltepe"),
            items: vec![item("10", "Döner Porsiyon", 2, 4500)],
            total_cents: 9000,
            placed_minutes_ago: 45,
            delivery_in_minutes: -10,
        },
    ];

    let mut orders: Vec<Order> = drafts.into_iter().map(|d| d.build(now)).collect();
    orders[0].notes = Some("Kapı zilini çalmayın, arayın lütfen".to_string());
    orders
}
