use proptest::prelude::*;
use quicknote_core::{normalize_note_content, NoteId, NoteList, NoteListError};

fn blank_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![' ', '\t', '\n', '\r', '\u{a0}', '\u{2003}', '\u{feff}']),
        0..12,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

fn note_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t\n]{0,3}[a-zA-Z0-9]{1,8}( [a-zA-Z0-9]{1,8}){0,3}[ \t\n]{0,3}",
        // NEL survives trimming, alone or around words.
        "[ \u{feff}]{0,2}\u{85}[a-z]{0,4}\u{85}?[ \u{a0}]{0,2}",
    ]
}

fn filled_list(texts: &[String]) -> NoteList {
    let mut list = NoteList::new();
    for text in texts {
        list.append(text).unwrap();
    }
    list
}

proptest! {
    #[test]
    fn blank_append_is_rejected_and_leaves_list_unchanged(
        existing in prop::collection::vec(note_text(), 0..5),
        blank in blank_text(),
    ) {
        let mut list = filled_list(&existing);
        let before: Vec<String> = list.contents().into_iter().map(str::to_string).collect();

        prop_assert_eq!(list.append(&blank).unwrap_err(), NoteListError::EmptyInput);
        prop_assert_eq!(list.contents(), before);
    }

    #[test]
    fn append_grows_by_one_with_trimmed_content(
        existing in prop::collection::vec(note_text(), 0..5),
        text in note_text(),
    ) {
        let mut list = filled_list(&existing);
        let before = list.len();

        let expected = normalize_note_content(&text).unwrap();
        let content = list.append(&text).unwrap().content().to_string();
        prop_assert_eq!(list.len(), before + 1);
        prop_assert_eq!(&content, &expected);
        prop_assert_eq!(list.contents().last().copied(), Some(expected.as_str()));
    }

    #[test]
    fn list_order_matches_append_order(texts in prop::collection::vec(note_text(), 0..12)) {
        let list = filled_list(&texts);
        let expected: Vec<String> = texts
            .iter()
            .filter_map(|text| normalize_note_content(text))
            .collect();
        prop_assert_eq!(list.contents(), expected);
    }

    #[test]
    fn delete_present_id_removes_exactly_that_note(
        texts in prop::collection::vec(note_text(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut list = filled_list(&texts);
        let ids: Vec<NoteId> = list.iter().map(|note| note.id()).collect();
        let target = ids[pick.index(ids.len())];

        let removed = list.delete(target).unwrap();
        prop_assert_eq!(removed.id(), target);
        prop_assert_eq!(list.len(), ids.len() - 1);
        prop_assert!(!list.contains(target));

        let remaining: Vec<NoteId> = list.iter().map(|note| note.id()).collect();
        let expected: Vec<NoteId> = ids.into_iter().filter(|id| *id != target).collect();
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn delete_absent_id_leaves_list_unchanged(texts in prop::collection::vec(note_text(), 0..8)) {
        let mut list = filled_list(&texts);
        let before: Vec<NoteId> = list.iter().map(|note| note.id()).collect();
        let foreign = NoteId::generate();

        prop_assert_eq!(list.delete(foreign).unwrap_err(), NoteListError::NotFound(foreign));
        let after: Vec<NoteId> = list.iter().map(|note| note.id()).collect();
        prop_assert_eq!(after, before);
    }
}
