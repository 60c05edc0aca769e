use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::PortfolioStore;
use crate::models::messages::{ChatMessage, ContactMessage, NewChatMessage, NewContactMessage};
use crate::models::portfolio::{
    order_current_last, Document, Experience, NewDocument, NewExperience, NewSkill, Skill,
};

/// `PortfolioStore` backed by PostgreSQL.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PortfolioStore for PgStore {
    async fn list_experiences(&self) -> Result<Vec<Experience>> {
        let mut experiences =
            sqlx::query_as::<_, Experience>("SELECT * FROM experiences ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        order_current_last(&mut experiences);
        Ok(experiences)
    }

    async fn create_experience(&self, experience: NewExperience) -> Result<Experience> {
        Ok(sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experiences (title, company, duration, achievements, current)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&experience.title)
        .bind(&experience.company)
        .bind(&experience.duration)
        .bind(&experience.achievements)
        .bind(experience.current)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_documents(&self) -> Result<Vec<Document>> {
        Ok(
            sqlx::query_as::<_, Document>("SELECT * FROM documents ORDER BY id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn get_document(&self, id: i32) -> Result<Option<Document>> {
        Ok(
            sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn create_document(&self, document: NewDocument) -> Result<Document> {
        Ok(sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (title, type, description, pages, file_path, preview_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&document.title)
        .bind(&document.doc_type)
        .bind(&document.description)
        .bind(document.pages)
        .bind(&document.file_path)
        .bind(&document.preview_url)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        Ok(sqlx::query_as::<_, Skill>("SELECT * FROM skills ORDER BY id")
            .fetch_all(&self.pool)
            .await?)
    }

    async fn create_skill(&self, skill: NewSkill) -> Result<Skill> {
        Ok(sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (category, name, proficiency, level)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&skill.category)
        .bind(&skill.name)
        .bind(skill.proficiency)
        .bind(&skill.level)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_chat_messages(&self) -> Result<Vec<ChatMessage>> {
        Ok(
            sqlx::query_as::<_, ChatMessage>("SELECT * FROM chat_messages ORDER BY created_at")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    async fn create_chat_message(&self, chat: NewChatMessage) -> Result<ChatMessage> {
        let row = sqlx::query_as::<_, ChatMessage>(
            "INSERT INTO chat_messages (message, response) VALUES ($1, $2) RETURNING *",
        )
        .bind(&chat.message)
        .bind(&chat.response)
        .fetch_one(&self.pool)
        .await?;
        debug!("Stored chat message {}", row.id);
        Ok(row)
    }

    async fn list_contact_messages(&self) -> Result<Vec<ContactMessage>> {
        Ok(sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages ORDER BY created_at",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn create_contact_message(&self, contact: NewContactMessage) -> Result<ContactMessage> {
        let row = sqlx::query_as::<_, ContactMessage>(
            "INSERT INTO contact_messages (name, email, message) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .fetch_one(&self.pool)
        .await?;
        debug!("Stored contact message {}", row.id);
        Ok(row)
    }

    async fn reset_portfolio(&self) -> Result<()> {
        sqlx::query("DELETE FROM skills").execute(&self.pool).await?;
        sqlx::query("DELETE FROM documents").execute(&self.pool).await?;
        sqlx::query("DELETE FROM experiences")
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
