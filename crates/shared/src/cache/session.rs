use chrono::Duration;
use deadpool_redis::{Connection, Pool, redis::AsyncCommands};
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::responses::Session;

/// Server side session records, keyed by user id. The JWT in the cookie
/// only proves identity; the Redis record is what keeps a login alive,
/// so deleting it on logout invalidates the token immediately.
#[derive(Clone)]
pub struct SessionStore {
    pool: Arc<Pool>,
}

fn session_key(user_id: i32) -> String {
    format!("session:{user_id}")
}

impl SessionStore {
    pub fn new(pool: Pool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    async fn get_conn(&self) -> Option<Connection> {
        match self.pool.get().await {
            Ok(conn) => Some(conn),
            Err(e) => {
                error!("Failed to get Redis connection from pool: {:?}", e);
                None
            }
        }
    }

    pub async fn create_session(&self, user_id: i32, session: &Session, ttl: Duration) -> bool {
        let json_data = match serde_json::to_string(session) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize session: {:?}", e);
                return false;
            }
        };

        if let Some(mut conn) = self.get_conn().await {
            let result: Result<(), _> = conn
                .set_ex(session_key(user_id), &json_data, ttl.num_seconds() as u64)
                .await;

            match result {
                Ok(_) => {
                    debug!("Session created for user_id: {}", user_id);
                    true
                }
                Err(e) => {
                    error!("Failed to create session: {:?}", e);
                    false
                }
            }
        } else {
            false
        }
    }

    pub async fn get_session(&self, user_id: i32) -> Option<Session> {
        let mut conn = self.get_conn().await?;
        let result: Result<Option<String>, _> = conn.get(session_key(user_id)).await;

        match result {
            Ok(Some(data)) => match serde_json::from_str::<Session>(&data) {
                Ok(session) => {
                    debug!("Session retrieved for user_id: {}", user_id);
                    Some(session)
                }
                Err(e) => {
                    error!("Failed to deserialize session: {:?}", e);
                    None
                }
            },
            Ok(None) => {
                debug!("Session not found for user_id: {}", user_id);
                None
            }
            Err(e) => {
                error!("Redis get error for session {}: {:?}", user_id, e);
                None
            }
        }
    }

    pub async fn delete_session(&self, user_id: i32) -> bool {
        if let Some(mut conn) = self.get_conn().await {
            let result: Result<(), _> = conn.del(session_key(user_id)).await;
            match result {
                Ok(_) => {
                    debug!("Session deleted for user_id: {}", user_id);
                    true
                }
                Err(e) => {
                    error!("Failed to delete session {}: {:?}", user_id, e);
                    false
                }
            }
        } else {
            false
        }
    }

    /// Sliding expiry. Called by the session middleware on every
    /// authenticated request so active users stay signed in.
    pub async fn refresh_session(&self, user_id: i32, ttl: Duration) -> bool {
        if let Some(mut conn) = self.get_conn().await {
            let result: Result<bool, _> = conn.expire(session_key(user_id), ttl.num_seconds()).await;
            match result {
                Ok(_) => {
                    debug!("Session TTL refreshed for user_id: {}", user_id);
                    true
                }
                Err(e) => {
                    error!("Failed to refresh session TTL {}: {:?}", user_id, e);
                    false
                }
            }
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_keys_are_namespaced_by_user() {
        assert_eq!(session_key(42), "session:42");
        assert_ne!(session_key(1), session_key(2));
    }
}
