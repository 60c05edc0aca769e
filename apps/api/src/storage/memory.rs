//! In-process `PortfolioStore` used by handler tests.

use std::sync::Mutex;

use anyhow::{bail, Result};
use async_trait::async_trait;
use chrono::Utc;

use super::PortfolioStore;
use crate::models::messages::{ChatMessage, ContactMessage, NewChatMessage, NewContactMessage};
use crate::models::portfolio::{
    order_current_last, Document, Experience, NewDocument, NewExperience, NewSkill, Skill,
};

#[derive(Default)]
struct Tables {
    next_id: i32,
    experiences: Vec<Experience>,
    documents: Vec<Document>,
    skills: Vec<Skill>,
    chat_messages: Vec<ChatMessage>,
    contact_messages: Vec<ContactMessage>,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation errors, standing in for a lost database.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn contact_count(&self) -> usize {
        self.tables.lock().unwrap().contact_messages.len()
    }

    pub fn chat_count(&self) -> usize {
        self.tables.lock().unwrap().chat_messages.len()
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            bail!("connection refused");
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn list_experiences(&self) -> Result<Vec<Experience>> {
        self.check()?;
        let mut experiences = self.tables.lock().unwrap().experiences.clone();
        order_current_last(&mut experiences);
        Ok(experiences)
    }

    async fn create_experience(&self, experience: NewExperience) -> Result<Experience> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let row = Experience {
            id: tables.next_id(),
            title: experience.title,
            company: experience.company,
            duration: experience.duration,
            achievements: experience.achievements,
            current: experience.current,
        };
        tables.experiences.push(row.clone());
        Ok(row)
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().documents.clone())
    }

    async fn get_document(&self, id: i32) -> Result<Option<Document>> {
        self.check()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.documents.iter().find(|d| d.id == id).cloned())
    }

    async fn create_document(&self, document: NewDocument) -> Result<Document> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let row = Document {
            id: tables.next_id(),
            title: document.title,
            doc_type: document.doc_type,
            description: document.description,
            pages: document.pages,
            file_path: document.file_path,
            preview_url: document.preview_url,
        };
        tables.documents.push(row.clone());
        Ok(row)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().skills.clone())
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let row = Skill {
            id: tables.next_id(),
            category: skill.category,
            name: skill.name,
            proficiency: skill.proficiency,
            level: skill.level,
        };
        tables.skills.push(row.clone());
        Ok(row)
    }

    async fn list_chat_messages(&self) -> Result<Vec<ChatMessage>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().chat_messages.clone())
    }

    async fn create_chat_message(&self, chat: NewChatMessage) -> Result<ChatMessage> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let row = ChatMessage {
            id: tables.next_id(),
            message: chat.message,
            response: chat.response,
            created_at: Utc::now(),
        };
        tables.chat_messages.push(row.clone());
        Ok(row)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        self.check()?;
        Ok(self.tables.lock().unwrap().contact_messages.clone())
    }

    async fn create_contact_message(&self, contact: NewContactMessage) -> Result<ContactMessage> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        let row = ContactMessage {
            id: tables.next_id(),
            name: contact.name,
            email: contact.email,
            message: contact.message,
            created_at: Utc::now(),
        };
        tables.contact_messages.push(row.clone());
        Ok(row)
    }

    async fn reset_portfolio(&self) -> Result<()> {
        self.check()?;
        let mut tables = self.tables.lock().unwrap();
        tables.skills.clear();
        tables.documents.clear();
        tables.experiences.clear();
        Ok(())
    }
}
