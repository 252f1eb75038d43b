//! Compiled-in list of high-traffic domains used for skeleton matching.
//!
//! Kept deliberately small relative to a production deployment; entries are
//! registrable domains, lowercase ASCII.

pub(crate) static TOP_DOMAINS: &[&str] = &[
    "adobe.com",
    "airbnb.com",
    "aliexpress.com",
    "alibaba.com",
    "amazon.com",
    "americanexpress.com",
    "apple.com",
    "baidu.com",
    "bankofamerica.com",
    "bestbuy.com",
    "binance.com",
    "bing.com",
    "blogger.com",
    "booking.com",
    "chase.com",
    "citibank.com",
    "coinbase.com",
    "costco.com",
    "dhl.com",
    "discord.com",
    "dropbox.com",
    "ebay.com",
    "epicgames.com",
    "facebook.com",
    "fedex.com",
    "github.com",
    "gmail.com",
    "google.com",
    "hsbc.com",
    "icloud.com",
    "instagram.com",
    "irs.gov",
    "linkedin.com",
    "live.com",
    "mail.ru",
    "mastercard.com",
    "microsoft.com",
    "naver.com",
    "netflix.com",
    "office.com",
    "outlook.com",
    "paypal.com",
    "pinterest.com",
    "proton.me",
    "qq.com",
    "rakuten.co.jp",
    "reddit.com",
    "roblox.com",
    "samsung.com",
    "signal.org",
    "spotify.com",
    "stackoverflow.com",
    "steampowered.com",
    "target.com",
    "telegram.org",
    "tiktok.com",
    "twitch.tv",
    "uber.com",
    "ups.com",
    "usps.com",
    "visa.com",
    "vk.com",
    "walmart.com",
    "wellsfargo.com",
    "whatsapp.com",
    "wikipedia.org",
    "wordpress.com",
    "x.com",
    "yahoo.com",
    "yandex.ru",
    "youtube.com",
    "zoom.us",
];
