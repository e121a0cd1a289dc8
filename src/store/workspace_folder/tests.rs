// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Flashtree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Flashtree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{encode_persisted_id_segment, StoreError, WorkspaceFolder, WriteDurability};
use crate::model::fixtures::{card, cid, deck_small_tree};
use crate::model::{Branch, Bullet, DecodeError, WorkspaceId};
use crate::store::FlashcardStore;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("flashtree-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct WorkspaceFolderTestCtx {
    _tmp: TempDir,
    folder: WorkspaceFolder,
    workspace: WorkspaceId,
}

impl WorkspaceFolderTestCtx {
    fn new(prefix: &str) -> Self {
        let tmp = TempDir::new(prefix);
        let folder = WorkspaceFolder::new(tmp.path().join("workspaces"));
        Self {
            _tmp: tmp,
            folder,
            workspace: WorkspaceId::new("team").unwrap(),
        }
    }

    fn seed(&mut self) {
        // Stored out of index order on purpose.
        let mut deck = deck_small_tree();
        deck.reverse();
        for card in &deck {
            self.folder.upsert_card(&self.workspace, card).unwrap();
        }
    }
}

#[fixture]
fn ctx() -> WorkspaceFolderTestCtx {
    WorkspaceFolderTestCtx::new("workspace-folder")
}

fn ids(cards: &[crate::model::Flashcard]) -> Vec<String> {
    cards.iter().map(|card| card.id().as_str().to_owned()).collect()
}

#[rstest]
fn missing_workspace_loads_as_empty(ctx: WorkspaceFolderTestCtx) {
    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert!(cards.is_empty());
    assert!(!ctx.folder.cards_path(&ctx.workspace).exists());
}

#[rstest]
fn load_orders_cards_by_index(mut ctx: WorkspaceFolderTestCtx) {
    ctx.seed();

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(ids(&cards), vec!["a", "b", "c", "d"]);
    assert_eq!(cards[0].children().get(Branch::True), Some(&cid("c")));
    assert_eq!(cards[0].bullets()[0].text(), "starts here");
}

#[rstest]
fn upsert_replaces_by_id(mut ctx: WorkspaceFolderTestCtx) {
    ctx.seed();

    let mut edited = card("b", 2).with_bullet(Bullet::new("edited", false));
    edited.set_title("Renamed");
    ctx.folder.upsert_card(&ctx.workspace, &edited).unwrap();

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(cards.len(), 4);
    let b = cards.iter().find(|card| card.id().as_str() == "b").unwrap();
    assert_eq!(b.title(), "Renamed");
    assert!(b.children().is_empty());
    assert_eq!(b.bullets()[0].text(), "edited");
}

#[rstest]
fn delete_reports_whether_a_card_was_removed(mut ctx: WorkspaceFolderTestCtx) {
    ctx.seed();

    assert!(ctx.folder.delete_card(&ctx.workspace, &cid("c")).unwrap());
    assert!(!ctx.folder.delete_card(&ctx.workspace, &cid("c")).unwrap());

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(ids(&cards), vec!["a", "b", "d"]);
}

#[rstest]
fn delete_clears_links_to_the_removed_card(mut ctx: WorkspaceFolderTestCtx) {
    ctx.seed();
    let twice = card("e", 5)
        .with_child(Branch::False, cid("b"))
        .with_child(Branch::True, cid("b"));
    ctx.folder.upsert_card(&ctx.workspace, &twice).unwrap();

    assert!(ctx.folder.delete_card(&ctx.workspace, &cid("b")).unwrap());

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(ids(&cards), vec!["a", "c", "d", "e"]);
    let a = &cards[0];
    assert_eq!(a.children().get(Branch::False), None);
    assert_eq!(a.children().get(Branch::True), Some(&cid("c")));
    assert!(cards[3].children().is_empty());
    assert!(crate::layout::layout_cards(&cards).dangling_edges().is_empty());
}

#[rstest]
fn create_numbers_drafts_after_the_highest_index(mut ctx: WorkspaceFolderTestCtx) {
    let first = ctx.folder.create_card(&ctx.workspace).unwrap();
    assert_eq!(first.id().as_str(), "card_0001");
    assert_eq!(first.index(), 1);

    ctx.seed();
    let next = ctx.folder.create_card(&ctx.workspace).unwrap();
    assert_eq!(next.id().as_str(), "card_0005");
    assert_eq!(next.index(), 5);
    assert_eq!(next.title(), "Untitled");
    assert_eq!(next.bullets()[0].text(), "New point");

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(cards.last(), Some(&next));
    assert_eq!(cards.len(), 6);
}

#[rstest]
fn create_never_replaces_a_card_holding_the_numbered_id(mut ctx: WorkspaceFolderTestCtx) {
    ctx.folder.upsert_card(&ctx.workspace, &card("card_0002", 1)).unwrap();

    let draft = ctx.folder.create_card(&ctx.workspace).unwrap();
    assert_eq!(draft.id().as_str(), "card_0003");
    assert_eq!(draft.index(), 3);
    assert_eq!(ctx.folder.load_cards(&ctx.workspace).unwrap().len(), 2);
}

#[rstest]
#[case("", vec!["a", "b", "c", "d"])]
#[case("4", vec!["d"])]
#[case("leaf", vec!["c"])]
#[case("nothing like this", vec![])]
fn search_uses_the_query_rules(
    mut ctx: WorkspaceFolderTestCtx,
    #[case] query: &str,
    #[case] expected: Vec<&str>,
) {
    ctx.seed();
    let hits = ctx.folder.search(&ctx.workspace, query).unwrap();
    assert_eq!(ids(&hits), expected);
}

#[rstest]
fn workspaces_are_isolated(mut ctx: WorkspaceFolderTestCtx) {
    ctx.seed();
    let other = WorkspaceId::new("other").unwrap();
    ctx.folder.upsert_card(&other, &card("z", 1)).unwrap();

    assert_eq!(ids(&ctx.folder.load_cards(&other).unwrap()), vec!["z"]);
    assert_eq!(ctx.folder.load_cards(&ctx.workspace).unwrap().len(), 4);
}

#[rstest]
fn loads_loosely_typed_rows(ctx: WorkspaceFolderTestCtx) {
    let path = ctx.folder.cards_path(&ctx.workspace);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"[
            {"id": "q2", "idx": 2, "title": "Second", "data": null},
            {"id": "q1", "idx": 1, "title": "First",
             "data": {"children": {"false": "q2", "true": null}}}
        ]"#,
    )
    .unwrap();

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(ids(&cards), vec!["q1", "q2"]);
    assert_eq!(cards[0].children().get(Branch::False), Some(&cid("q2")));
    assert!(cards[1].bullets().is_empty());
}

#[rstest]
fn undecodable_rows_report_their_position(ctx: WorkspaceFolderTestCtx) {
    let path = ctx.folder.cards_path(&ctx.workspace);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, r#"[{"id": "ok", "idx": 1}, {"id": "bad", "idx": 0}]"#).unwrap();

    let err = ctx.folder.load_cards(&ctx.workspace).unwrap_err();
    match err {
        StoreError::Decode {
            position, source, ..
        } => {
            assert_eq!(position, 1);
            assert!(matches!(source, DecodeError::NonPositiveIndex { idx: 0, .. }));
        }
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[rstest]
fn card_ids_with_slashes_load(ctx: WorkspaceFolderTestCtx) {
    let path = ctx.folder.cards_path(&ctx.workspace);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"[
            {"id": "topic/1", "idx": 1, "data": {"children": {"true": "topic/2"}}},
            {"id": "topic/2", "idx": 2}
        ]"#,
    )
    .unwrap();

    let cards = ctx.folder.load_cards(&ctx.workspace).unwrap();
    assert_eq!(ids(&cards), vec!["topic/1", "topic/2"]);
    let layout = crate::layout::layout_cards(&cards);
    assert_eq!(layout.edges()[0].id(), "topic/1->topic/2:T");
    assert_eq!(layout.layer_of(&cid("topic/2")), Some(1));
}

#[rstest]
fn malformed_json_is_a_json_error(ctx: WorkspaceFolderTestCtx) {
    let path = ctx.folder.cards_path(&ctx.workspace);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{not json").unwrap();

    let err = ctx.folder.load_cards(&ctx.workspace).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
}

#[rstest]
fn durable_writes_round_trip(ctx: WorkspaceFolderTestCtx) {
    let mut folder = ctx.folder.clone().with_durability(WriteDurability::Durable);
    assert_eq!(folder.durability(), WriteDurability::Durable);

    folder.upsert_card(&ctx.workspace, &card("a", 1)).unwrap();
    assert_eq!(ids(&folder.load_cards(&ctx.workspace).unwrap()), vec!["a"]);

    let leftovers = std::fs::read_dir(folder.workspace_dir(&ctx.workspace))
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(".flashtree.tmp."))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn workspace_folder_names_are_filesystem_safe() {
    assert_eq!(encode_persisted_id_segment("team"), "team");
    assert_eq!(encode_persisted_id_segment(".."), "~2e2e");
    assert_eq!(encode_persisted_id_segment("CON"), "~434f4e");
    assert_eq!(encode_persisted_id_segment("a:b"), "~613a62");
    assert_eq!(encode_persisted_id_segment("lpt3.json"), "~6c7074332e6a736f6e");
    assert_eq!(encode_persisted_id_segment("com0"), "com0");
    assert_eq!(encode_persisted_id_segment("team "), "~7465616d20");
}
