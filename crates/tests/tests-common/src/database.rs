//! A database whose behaviour is scripted by the test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use probe_engine_execution::{Connection, ConnectionError, Database, QueryError};
use query_probe_configuration::Credentials;

#[derive(Debug, Clone)]
enum Behaviour {
    Succeed { rows: usize },
    RefuseConnection,
    FailQuery { message: String },
}

/// What happened to the connections handed out by a [`FakeDatabase`].
#[derive(Debug, Default)]
pub struct ConnectionLog {
    opened: AtomicUsize,
    closed: AtomicUsize,
    statements: Mutex<Vec<String>>,
    credentials: Mutex<Vec<Credentials>>,
}

#[derive(Debug, Clone)]
pub struct FakeDatabase {
    behaviour: Behaviour,
    connect_delay: Duration,
    query_delay: Duration,
    log: Arc<ConnectionLog>,
}

impl FakeDatabase {
    /// Connections succeed and every statement returns `rows` rows.
    pub fn reachable(rows: usize) -> Self {
        Self::new(Behaviour::Succeed { rows })
    }

    /// Every connection attempt is refused.
    pub fn unreachable() -> Self {
        Self::new(Behaviour::RefuseConnection)
    }

    /// Connections succeed but every statement fails with `message`.
    pub fn failing_query(message: &str) -> Self {
        Self::new(Behaviour::FailQuery {
            message: message.to_string(),
        })
    }

    fn new(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            connect_delay: Duration::from_millis(20),
            query_delay: Duration::from_millis(10),
            log: Arc::default(),
        }
    }

    #[must_use]
    pub fn with_connect_delay(mut self, delay: Duration) -> Self {
        self.connect_delay = delay;
        self
    }

    #[must_use]
    pub fn with_query_delay(mut self, delay: Duration) -> Self {
        self.query_delay = delay;
        self
    }

    pub fn opened(&self) -> usize {
        self.log.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.log.closed.load(Ordering::SeqCst)
    }

    /// Every statement that reached the database, in order.
    pub fn statements(&self) -> Vec<String> {
        self.log.statements.lock().unwrap().clone()
    }

    /// The credentials used for every connection attempt, in order.
    pub fn credentials(&self) -> Vec<Credentials> {
        self.log.credentials.lock().unwrap().clone()
    }
}

#[async_trait]
impl Database for FakeDatabase {
    async fn connect(
        &self,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        self.log
            .credentials
            .lock()
            .unwrap()
            .push(credentials.clone());
        tokio::time::sleep(self.connect_delay).await;

        if let Behaviour::RefuseConnection = self.behaviour {
            return Err(ConnectionError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                format!("connection refused by {}:{}", credentials.host, credentials.port),
            )));
        }

        self.log.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(FakeConnection {
            behaviour: self.behaviour.clone(),
            query_delay: self.query_delay,
            log: Arc::clone(&self.log),
        }))
    }
}

struct FakeConnection {
    behaviour: Behaviour,
    query_delay: Duration,
    log: Arc<ConnectionLog>,
}

#[async_trait]
impl Connection for FakeConnection {
    async fn execute(&mut self, sql: &str) -> Result<usize, QueryError> {
        self.log.statements.lock().unwrap().push(sql.to_string());
        tokio::time::sleep(self.query_delay).await;

        match &self.behaviour {
            Behaviour::Succeed { rows } => Ok(*rows),
            Behaviour::FailQuery { message } => Err(QueryError::driver(message.clone())),
            Behaviour::RefuseConnection => unreachable!("refused connections are never opened"),
        }
    }

    async fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        self.log.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
