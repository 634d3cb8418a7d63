//! # Revizor Channels
//! Outbound notification channel implementations.

pub mod telegram;

pub use telegram::TelegramChannel;
