//! # Generic Store Actor
//!
//! This module defines the `StoreActor`, the server side of a record
//! collection. It owns the in-memory store and processes messages
//! sequentially, which is what makes admission checks and batch inserts
//! atomic without any locking.

use crate::client::StoreClient;
use crate::error::StoreError;
use crate::message::{BulkReport, StoreRequest};
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages one collection of records.
///
/// # Architecture Note
/// This struct is the "Server" half of a store. It owns the state
/// (`records`) and the receiver end of the channel. Each instance processes
/// its own messages *sequentially* in a loop, so the `HashMap` needs no
/// `Mutex` or `RwLock`: exclusive ownership of state within the task is the
/// synchronization.
///
/// # Usage Pattern
///
/// 1. **Create**: call [`StoreActor::new`] to get the actor (server) and
///    its [`StoreClient`] (interface).
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use record_store::{Record, StoreActor};
/// use async_trait::async_trait;
/// use std::collections::HashMap;
///
/// #[derive(Clone, Debug)]
/// struct Note { id: u32, body: String }
/// #[derive(Debug)]
/// struct NoteDraft { body: String }
/// #[derive(Debug)]
/// enum NoteQuery { Containing(String) }
/// #[derive(Debug)]
/// enum NoteQueryResult { Containing(Vec<Note>) }
/// #[derive(Debug, thiserror::Error)]
/// #[error("note error")]
/// struct NoteError;
///
/// #[async_trait]
/// impl Record for Note {
///     type Id = u32;
///     type Draft = NoteDraft;
///     type Query = NoteQuery;
///     type QueryResult = NoteQueryResult;
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_draft(id: u32, draft: NoteDraft) -> Result<Self, Self::Error> {
///         Ok(Self { id, body: draft.body })
///     }
///
///     fn answer(query: NoteQuery, records: &HashMap<u32, Note>) -> NoteQueryResult {
///         match query {
///             NoteQuery::Containing(needle) => NoteQueryResult::Containing(
///                 records.values().filter(|n| n.body.contains(&needle)).cloned().collect(),
///             ),
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, client) = StoreActor::<Note>::new(10);
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     let note = client.insert(NoteDraft { body: "hello".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Insert**: `admit` → `from_draft` → `on_create` → store. Responds
///   with the created record; any hook error responds
///   [`StoreError::Record`].
/// * **InsertMany**: the same pipeline per item, inside one message. A
///   failed item pushes its error into a [`BulkReport`] and the batch
///   continues; earlier successes stay inserted. Because the whole batch is
///   one message, no other caller's write interleaves with it.
/// * **Get**: clone of the record, `None` when absent.
/// * **List**: clones of every record.
/// * **Query**: delegates to [`Record::answer`] over the full collection.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: Record> StoreActor<T> {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is
    ///   full, calls to the client will wait until there is space.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// 1. The `StoreActor` instance (the server), which must be run via
    ///    `.run()`.
    /// 2. The `StoreClient` instance, which can be cloned and shared to
    ///    send requests.
    pub fn new(buffer_size: usize) -> (Self, StoreClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: HashMap::new(),
            next_id: 1,
        };
        let client = StoreClient::new(sender);
        (actor, client)
    }

    /// The shared insert pipeline: admission check against the current
    /// collection, construction, creation hook, then storage.
    async fn create_record(
        &mut self,
        draft: T::Draft,
        context: &T::Context,
    ) -> Result<(T::Id, T), T::Error> {
        T::admit(&draft, &self.records)?;
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut record = T::from_draft(id.clone(), draft)?;
        record.on_create(context).await?;
        self.records.insert(id.clone(), record.clone());
        Ok((id, record))
    }

    /// Runs the actor's event loop, processing messages until the channel
    /// closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every `on_create` hook. This
    /// allows records to reach external dependencies (like other clients)
    /// that were created *after* the actor was instantiated but *before*
    /// the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Customer" instead of "crm::model::customer::Customer")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Insert { draft, respond_to } => {
                    debug!(entity_type, ?draft, "Insert");
                    match self.create_record(draft, &context).await {
                        Ok((id, record)) => {
                            info!(entity_type, %id, size = self.records.len(), "Created");
                            let _ = respond_to.send(Ok(record));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Insert failed");
                            let _ = respond_to.send(Err(StoreError::Record(e)));
                        }
                    }
                }
                StoreRequest::InsertMany { drafts, respond_to } => {
                    debug!(entity_type, count = drafts.len(), "InsertMany");
                    let mut report = BulkReport {
                        created: Vec::new(),
                        errors: Vec::new(),
                    };
                    for draft in drafts {
                        match self.create_record(draft, &context).await {
                            Ok((id, record)) => {
                                info!(entity_type, %id, size = self.records.len(), "Created");
                                report.created.push(record);
                            }
                            Err(e) => {
                                warn!(entity_type, error = %e, "Item rejected");
                                report.errors.push(e);
                            }
                        }
                    }
                    info!(
                        entity_type,
                        created = report.created.len(),
                        rejected = report.errors.len(),
                        size = self.records.len(),
                        "Bulk insert done"
                    );
                    let _ = respond_to.send(Ok(report));
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.records.get(&id).cloned();
                    let found = record.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.values().cloned().collect()));
                }
                StoreRequest::Query { query, respond_to } => {
                    debug!(entity_type, ?query, "Query");
                    let _ = respond_to.send(Ok(T::answer(query, &self.records)));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }
}
