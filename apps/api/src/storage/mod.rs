//! Typed CRUD access to the portfolio tables.
//!
//! Handlers only see the `PortfolioStore` trait; `PgStore` is the production
//! implementation. Every method is a single pass-through query: no pagination,
//! no filtering, no transactions spanning entities.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::messages::{ChatMessage, ContactMessage, NewChatMessage, NewContactMessage};
use crate::models::portfolio::{
    Document, Experience, NewDocument, NewExperience, NewSkill, Skill,
};

mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgStore;

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// All experiences, non-current first, otherwise in insertion order.
    async fn list_experiences(&self) -> Result<Vec<Experience>>;
    async fn create_experience(&self, experience: NewExperience) -> Result<Experience>;

    async fn list_documents(&self) -> Result<Vec<Document>>;
    async fn get_document(&self, id: i32) -> Result<Option<Document>>;
    async fn create_document(&self, document: NewDocument) -> Result<Document>;

    async fn list_skills(&self) -> Result<Vec<Skill>>;
    async fn create_skill(&self, skill: NewSkill) -> Result<Skill>;

    async fn list_chat_messages(&self) -> Result<Vec<ChatMessage>>;
    async fn create_chat_message(&self, chat: NewChatMessage) -> Result<ChatMessage>;

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>>;
    async fn create_contact_message(&self, contact: NewContactMessage) -> Result<ContactMessage>;

    /// Removes all skills, documents and experiences. Used by seeding only.
    async fn reset_portfolio(&self) -> Result<()>;
}
