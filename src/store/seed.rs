use crate::api::models::Contact;

/// Records present in every fresh store, in this order.
pub fn seed_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "John Doe".to_string(),
            phone: "+628912345678".to_string(),
            email: "johndoe@example.com".to_string(),
        },
        Contact {
            id: 2,
            name: "Samantha Jane".to_string(),
            phone: "+628912345999".to_string(),
            email: "samantha@example.com".to_string(),
        },
    ]
}
