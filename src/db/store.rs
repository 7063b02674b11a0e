// SPDX-License-Identifier: MIT

//! Document store client with typed operations.
//!
//! Provides high-level operations for users, classes, trainers, reviews,
//! articles, subscribers, trainer applications, bookings and payments.
//!
//! Two backends share the same API: Firestore in production and an
//! in-memory store for tests and offline development. Users and
//! subscribers are keyed by email; everything else uses uuid document ids.

use crate::db::collections;
use crate::db::memory::MemoryStore;
use crate::error::AppError;
use crate::models::{
    Article, Booking, GymClass, Payment, Review, Subscriber, TrainerApplication, TrainerProfile,
    User,
};

fn db_err<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Database(e.to_string())
}

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(MemoryStore),
}

/// Document store client.
#[derive(Clone)]
pub struct GymDb {
    backend: Backend,
}

impl GymDb {
    /// Create a Firestore-backed client.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create an in-memory client (tests / offline development).
    pub fn new_memory() -> Self {
        Self {
            backend: Backend::Memory(MemoryStore::new()),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by email (the document ID).
    pub async fn get_user(&self, email: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(email)
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.get(collections::USERS, email).await,
        }
    }

    /// Create or update a user.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USERS)
                    .document_id(&user.email)
                    .object(user)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::USERS, &user.email, user).await,
        }
    }

    /// All users.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::USERS)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::USERS).await,
        }
    }

    // ─── Class Operations ────────────────────────────────────────

    pub async fn get_class(&self, id: &str) -> Result<Option<GymClass>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::CLASSES)
                .obj()
                .one(id)
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.get(collections::CLASSES, id).await,
        }
    }

    pub async fn insert_class(&self, class: &GymClass) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::CLASSES)
                    .document_id(&class.id)
                    .object(class)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::CLASSES, &class.id, class).await,
        }
    }

    pub async fn list_classes(&self) -> Result<Vec<GymClass>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::CLASSES)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::CLASSES).await,
        }
    }

    // ─── Trainer Profile Operations ──────────────────────────────

    pub async fn get_trainer(&self, id: &str) -> Result<Option<TrainerProfile>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::TRAINERS)
                .obj()
                .one(id)
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.get(collections::TRAINERS, id).await,
        }
    }

    pub async fn insert_trainer(&self, trainer: &TrainerProfile) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::TRAINERS)
                    .document_id(&trainer.id)
                    .object(trainer)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::TRAINERS, &trainer.id, trainer).await,
        }
    }

    pub async fn list_trainers(&self) -> Result<Vec<TrainerProfile>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::TRAINERS)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::TRAINERS).await,
        }
    }

    // ─── Review Operations ───────────────────────────────────────

    pub async fn insert_review(&self, review: &Review) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::REVIEWS)
                    .document_id(&review.id)
                    .object(review)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::REVIEWS, &review.id, review).await,
        }
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::REVIEWS)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::REVIEWS).await,
        }
    }

    // ─── Article Operations ──────────────────────────────────────

    pub async fn insert_article(&self, article: &Article) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::ARTICLES)
                    .document_id(&article.id)
                    .object(article)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::ARTICLES, &article.id, article).await,
        }
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::ARTICLES)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::ARTICLES).await,
        }
    }

    // ─── Subscriber Operations ───────────────────────────────────

    /// Get a subscriber by email (the document ID).
    pub async fn get_subscriber(&self, email: &str) -> Result<Option<Subscriber>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::SUBSCRIBERS)
                .obj()
                .one(email)
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.get(collections::SUBSCRIBERS, email).await,
        }
    }

    pub async fn insert_subscriber(&self, subscriber: &Subscriber) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::SUBSCRIBERS)
                    .document_id(&subscriber.email)
                    .object(subscriber)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => {
                store
                    .put(collections::SUBSCRIBERS, &subscriber.email, subscriber)
                    .await
            }
        }
    }

    pub async fn list_subscribers(&self) -> Result<Vec<Subscriber>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::SUBSCRIBERS)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::SUBSCRIBERS).await,
        }
    }

    // ─── Trainer Application Operations ──────────────────────────

    pub async fn get_application(&self, id: &str) -> Result<Option<TrainerApplication>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::APPLIED_TRAINERS)
                .obj()
                .one(id)
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.get(collections::APPLIED_TRAINERS, id).await,
        }
    }

    pub async fn insert_application(&self, app: &TrainerApplication) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::APPLIED_TRAINERS)
                    .document_id(&app.id)
                    .object(app)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::APPLIED_TRAINERS, &app.id, app).await,
        }
    }

    pub async fn list_applications(&self) -> Result<Vec<TrainerApplication>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::APPLIED_TRAINERS)
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => store.list(collections::APPLIED_TRAINERS).await,
        }
    }

    // ─── Trainer Promotion ───────────────────────────────────────

    /// Atomically promote the user referenced by a pending application.
    ///
    /// The user document gets role = trainer, status = Verified and the
    /// application's profile fields merged in; the application document is
    /// deleted in the same transaction.
    ///
    /// Returns `false` when the application no longer exists, which makes
    /// re-invocation after a successful promotion a no-op instead of a
    /// second role write.
    pub async fn promote_applicant(&self, application_id: &str) -> Result<bool, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                // Existence check up front: an already-consumed application
                // must not be reprocessed.
                let app: Option<TrainerApplication> = client
                    .fluent()
                    .select()
                    .by_id_in(collections::APPLIED_TRAINERS)
                    .obj()
                    .one(application_id)
                    .await
                    .map_err(db_err)?;

                let Some(app) = app else {
                    return Ok(false);
                };

                let user: Option<User> = client
                    .fluent()
                    .select()
                    .by_id_in(collections::USERS)
                    .obj()
                    .one(&app.email)
                    .await
                    .map_err(db_err)?;

                let Some(mut user) = user else {
                    return Err(AppError::NotFound(format!("User {} not found", app.email)));
                };

                user.apply_promotion(&app);

                // User update and application delete commit together.
                let mut transaction = client.begin_transaction().await.map_err(|e| {
                    AppError::Database(format!("Failed to begin transaction: {}", e))
                })?;

                client
                    .fluent()
                    .update()
                    .in_col(collections::USERS)
                    .document_id(&user.email)
                    .object(&user)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!("Failed to add user update to transaction: {}", e))
                    })?;

                client
                    .fluent()
                    .delete()
                    .from(collections::APPLIED_TRAINERS)
                    .document_id(application_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add application delete to transaction: {}",
                            e
                        ))
                    })?;

                transaction
                    .commit()
                    .await
                    .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

                tracing::info!(application_id, email = %user.email, "Trainer promotion committed");

                Ok(true)
            }
            Backend::Memory(store) => {
                // Single write-lock section: check, merge and delete without
                // interleaving.
                store
                    .mutate(|cols| {
                        let Some(app_value) = cols
                            .get(collections::APPLIED_TRAINERS)
                            .and_then(|docs| docs.get(application_id))
                            .cloned()
                        else {
                            return Ok(false);
                        };
                        let app: TrainerApplication =
                            serde_json::from_value(app_value).map_err(db_err)?;

                        let Some(user_value) = cols
                            .get(collections::USERS)
                            .and_then(|docs| docs.get(&app.email))
                            .cloned()
                        else {
                            return Err(AppError::NotFound(format!(
                                "User {} not found",
                                app.email
                            )));
                        };
                        let mut user: User = serde_json::from_value(user_value).map_err(db_err)?;

                        user.apply_promotion(&app);
                        let updated = serde_json::to_value(&user).map_err(db_err)?;
                        cols.entry(collections::USERS)
                            .or_default()
                            .insert(user.email.clone(), updated);

                        if let Some(apps) = cols.get_mut(collections::APPLIED_TRAINERS) {
                            apps.remove(application_id);
                        }

                        Ok(true)
                    })
                    .await
            }
        }
    }

    // ─── Booking Operations ──────────────────────────────────────

    pub async fn insert_booking(&self, booking: &Booking) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::BOOKINGS)
                    .document_id(&booking.id)
                    .object(booking)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::BOOKINGS, &booking.id, booking).await,
        }
    }

    /// Bookings where the given email is the buyer.
    pub async fn bookings_for_email(&self, email: &str) -> Result<Vec<Booking>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::BOOKINGS)
                .filter(|q| q.for_all([q.field("buyer_email").eq(email)]))
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => {
                store
                    .find_by_field(collections::BOOKINGS, "buyer_email", email)
                    .await
            }
        }
    }

    // ─── Payment Operations ──────────────────────────────────────

    pub async fn insert_payment(&self, payment: &Payment) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::PAYMENTS)
                    .document_id(&payment.id)
                    .object(payment)
                    .execute()
                    .await
                    .map_err(db_err)?;
                Ok(())
            }
            Backend::Memory(store) => store.put(collections::PAYMENTS, &payment.id, payment).await,
        }
    }

    /// Payments recorded for a given email.
    pub async fn payments_for_email(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::PAYMENTS)
                .filter(|q| q.for_all([q.field("email").eq(email)]))
                .obj()
                .query()
                .await
                .map_err(db_err),
            Backend::Memory(store) => {
                store
                    .find_by_field(collections::PAYMENTS, "email", email)
                    .await
            }
        }
    }
}
