use image::{ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};
use std::io::Cursor;

/// A small PNG with a transparent corner.
pub fn logo_png() -> Vec<u8> {
    let mut img = RgbaImage::from_pixel(24, 12, Rgba([20, 60, 160, 255]));
    img.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode fixture png");
    bytes
}

/// A snapshot as the host form would export it, with both the flat keys and
/// the equipment records in use.
pub fn full_snapshot() -> Value {
    json!({
        "name": "Jack Smith",
        "date": "2024-03-01T00:00:00",
        "work_location": "Leeds Depot",
        "return_date": "",
        "equipment": [
            { "DESCRIPTION": "Laptop", "CONDITION AT ISSUE": "New", "SERIAL No": "SN-1", "ASSET No": "" },
            { "DESCRIPTION": "Dock", "CONDITION AT ISSUE": "Used", "SERIAL No": "SN-2", "ASSET No": "A-99" }
        ],
        "eq_desc_2": "Headset",
        "eq_asset_2": "A-100",
        "returned_equipment": [
            { "DESCRIPTION": "Old phone", "RETURNED CONDITION": "Cracked", "SERIAL No": "P-7", "ASSET No": "A-12" }
        ],
        "issuer_name": "Dana Lee",
        "receiver_name": "Jack Smith",
        "starter_full_name": "Jack Smith",
        "starter_role": "Site Engineer",
        "starter_instructions": "Collect your badge from reception on day one.",
        "laptop_username": "jack.smith",
        "laptop_password": "Winter-2024",
        "m365_user_base": "jack.smith",
        "m365_domain": "statom.co.uk",
        "m365_password": "Spring-2024",
        "m365_2fa": true,
        "extra_accounts": [
            { "Software": "Procore", "Account": "jack@procore", "Password": "pc-1" },
            { "Software": "", "Account": " ", "Password": "" },
            { "Software": "Sage", "Account": "jsmith", "Password": "sg-2" }
        ]
    })
}

/// `count` distinct, non-blank extra-account rows.
pub fn extra_accounts(count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({ "Software": format!("app-{i}"), "Account": "acct", "Password": "pw" }))
            .collect(),
    )
}
