use async_trait::async_trait;
use ledger_actor::{LedgerActor, LedgerEntry, LedgerError};

/// A bar tab: generated numeric ids, partial updates, queryable by owner.
#[derive(Clone, Debug, PartialEq)]
struct Tab {
    id: u32,
    owner: String,
    total: f64,
}

#[derive(Debug)]
struct TabCreate {
    owner: String,
    total: f64,
}

#[derive(Debug)]
struct TabPatch {
    owner: Option<String>,
    total: Option<f64>,
}

#[derive(Debug)]
struct TabFilter {
    owner: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum TabError {
    #[error("Tab total cannot be negative: {0}")]
    NegativeTotal(f64),
}

#[async_trait]
impl LedgerEntry for Tab {
    type Id = u32;
    type Create = TabCreate;
    type Update = TabPatch;
    type Filter = TabFilter;
    type Context = ();
    type Error = TabError;

    fn assign_id(next: u32, _params: &TabCreate) -> u32 {
        next
    }

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create(id: u32, params: TabCreate) -> Result<Self, TabError> {
        if params.total < 0.0 {
            return Err(TabError::NegativeTotal(params.total));
        }
        Ok(Self {
            id,
            owner: params.owner,
            total: params.total,
        })
    }

    async fn on_update(&mut self, patch: TabPatch, _ctx: &()) -> Result<(), TabError> {
        if let Some(total) = patch.total {
            if total < 0.0 {
                return Err(TabError::NegativeTotal(total));
            }
            self.total = total;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        Ok(())
    }

    fn matches(&self, filter: &TabFilter) -> bool {
        filter.owner.as_deref().is_none_or(|owner| self.owner == owner)
    }
}

/// A coat-check token: the caller picks the code, duplicates are rejected.
#[derive(Clone, Debug, PartialEq)]
struct Token {
    code: String,
    shelf: u32,
}

#[derive(Debug)]
struct TokenCreate {
    code: String,
    shelf: u32,
}

#[derive(Debug)]
struct TokenPatch {
    shelf: u32,
}

#[derive(Debug, thiserror::Error)]
#[error("Token error")]
struct TokenError;

#[async_trait]
impl LedgerEntry for Token {
    type Id = String;
    type Create = TokenCreate;
    type Update = TokenPatch;
    type Filter = ();
    type Context = ();
    type Error = TokenError;

    fn assign_id(_next: u32, params: &TokenCreate) -> String {
        params.code.clone()
    }

    fn id(&self) -> &String {
        &self.code
    }

    fn from_create(code: String, params: TokenCreate) -> Result<Self, TokenError> {
        Ok(Self {
            code,
            shelf: params.shelf,
        })
    }

    async fn on_update(&mut self, patch: TokenPatch, _ctx: &()) -> Result<(), TokenError> {
        self.shelf = patch.shelf;
        Ok(())
    }
}

#[tokio::test]
async fn generated_ids_are_sequential_and_create_returns_the_stored_entry() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let first = client
        .create(TabCreate {
            owner: "Ines".to_string(),
            total: 12.0,
        })
        .await
        .unwrap();
    let second = client
        .create(TabCreate {
            owner: "Noor".to_string(),
            total: 3.5,
        })
        .await
        .unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.total, 12.0);

    let fetched = client.get(2).await.unwrap().unwrap();
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn failed_create_stores_nothing() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .create(TabCreate {
            owner: "Ines".to_string(),
            total: -1.0,
        })
        .await;
    assert!(matches!(result, Err(LedgerError::EntryError(_))));

    let all = client.query(TabFilter { owner: None }).await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let tab = client
        .create(TabCreate {
            owner: "Ines".to_string(),
            total: 12.0,
        })
        .await
        .unwrap();

    let updated = client
        .update(
            tab.id,
            TabPatch {
                owner: None,
                total: Some(20.0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.owner, "Ines");
    assert_eq!(updated.total, 20.0);
}

#[tokio::test]
async fn failed_update_leaves_the_entry_unchanged() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let tab = client
        .create(TabCreate {
            owner: "Ines".to_string(),
            total: 12.0,
        })
        .await
        .unwrap();

    let result = client
        .update(
            tab.id,
            TabPatch {
                owner: Some("Noor".to_string()),
                total: Some(-5.0),
            },
        )
        .await;
    assert!(matches!(result, Err(LedgerError::EntryError(_))));

    let fetched = client.get(tab.id).await.unwrap().unwrap();
    assert_eq!(fetched.owner, "Ines");
    assert_eq!(fetched.total, 12.0);
}

#[tokio::test]
async fn update_of_missing_entry_is_not_found() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let result = client
        .update(
            42,
            TabPatch {
                owner: None,
                total: Some(1.0),
            },
        )
        .await;
    assert!(matches!(result, Err(LedgerError::NotFound(id)) if id == "42"));
}

#[tokio::test]
async fn query_filters_the_whole_ledger() {
    let (actor, client) = LedgerActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    for (owner, total) in [("Ines", 12.0), ("Noor", 3.5), ("Ines", 7.0)] {
        client
            .create(TabCreate {
                owner: owner.to_string(),
                total,
            })
            .await
            .unwrap();
    }

    let ines = client
        .query(TabFilter {
            owner: Some("Ines".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(ines.len(), 2);
    assert!(ines.iter().all(|tab| tab.owner == "Ines"));

    let everyone = client.query(TabFilter { owner: None }).await.unwrap();
    assert_eq!(everyone.len(), 3);
}

#[tokio::test]
async fn natural_key_ledger_rejects_duplicates() {
    let (actor, client) = LedgerActor::<Token>::new(10);
    tokio::spawn(actor.run(()));

    let token = client
        .create(TokenCreate {
            code: "A17".to_string(),
            shelf: 4,
        })
        .await
        .unwrap();
    assert_eq!(token.code, "A17");

    let duplicate = client
        .create(TokenCreate {
            code: "A17".to_string(),
            shelf: 9,
        })
        .await;
    assert!(matches!(duplicate, Err(LedgerError::AlreadyExists(code)) if code == "A17"));

    // The original entry is untouched
    let stored = client.get("A17".to_string()).await.unwrap().unwrap();
    assert_eq!(stored.shelf, 4);
}

#[tokio::test]
async fn seeded_ledger_continues_above_the_seeded_ids() {
    let seed = vec![
        Tab {
            id: 1,
            owner: "Ines".to_string(),
            total: 12.0,
        },
        Tab {
            id: 2,
            owner: "Noor".to_string(),
            total: 3.5,
        },
    ];
    let (actor, client) = LedgerActor::with_entries(10, 3, seed);
    tokio::spawn(actor.run(()));

    let seeded = client.get(1).await.unwrap().unwrap();
    assert_eq!(seeded.owner, "Ines");

    let fresh = client
        .create(TabCreate {
            owner: "Ravi".to_string(),
            total: 9.0,
        })
        .await
        .unwrap();
    assert_eq!(fresh.id, 3);
}
