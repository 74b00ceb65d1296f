//! Integration tests for the serialization engine with a small catalog.

use uilayout_core::{
    Capabilities, Component, ConversionError, ContainerRole, Error, RegistrationError,
    ResolutionError, Stylesheet, TypeBuilder, TypeInfo, TypeRegistry, WriteOptions, load,
    load_into, save, save_object,
};

const TILE: Capabilities = Capabilities::custom(1);

static TILE_KIND: TypeInfo = TypeInfo::new("ITile", Capabilities::IDENTITY.union(TILE));

#[derive(Debug, Default)]
struct Board {
    title: String,
    tiles: Vec<Box<dyn Component>>,
    meta: Option<Meta>,
}

#[derive(Debug, Default)]
struct Tile {
    size: i32,
    column: i32,
    cached: i32,
}

#[derive(Debug, Default)]
struct Note {
    text: String,
}

#[derive(Debug, Default)]
struct Meta {
    author: String,
}

uilayout_core::component!(Board => TypeInfo::new("Board", Capabilities::empty()));
uilayout_core::component!(Tile => TypeInfo::new("Tile", Capabilities::IDENTITY.union(TILE)));
uilayout_core::component!(Note => TypeInfo::new("Note", Capabilities::IDENTITY));
uilayout_core::component!(Meta => TypeInfo::new("Meta", Capabilities::empty()));

fn new_tile() -> Tile {
    Tile {
        size: 1,
        ..Tile::default()
    }
}

fn registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new(Capabilities::IDENTITY);
    registry
        .register(
            TypeBuilder::<Board>::new(Board::default)
                .property("Title", |b| b.title.clone(), |b, v| b.title = v)
                .default_value(String::new())
                .polymorphic_list("Tiles", &TILE_KIND, |b| &b.tiles, |b, t| b.tiles.push(t))
                .object::<Meta>("Meta", |b| b.meta.as_ref(), |b, m| b.meta = Some(m))
                .accepts(ContainerRole::Widgets, &TILE_KIND, |b, t| b.tiles.push(t))
                .build(),
        )
        .unwrap();
    registry
        .register(
            TypeBuilder::<Tile>::new(new_tile)
                .property("Size", |t| t.size, |t, v| t.size = v)
                .default_value(1)
                .property("Column", |t| t.column, |t, v| t.column = v)
                .default_value(0)
                .property("Position", |t| t.column, |t, v| t.column = v)
                .obsolete()
                .read_only("Area", |t| t.size * t.size)
                .property("Cached", |t| t.cached, |t, v| t.cached = v)
                .not_serialized()
                .build(),
        )
        .unwrap();
    registry
        .register(
            TypeBuilder::<Note>::new(Note::default)
                .property("Text", |n| n.text.clone(), |n, v| n.text = v)
                .build(),
        )
        .unwrap();
    registry
        .register(
            TypeBuilder::<Meta>::new(Meta::default)
                .property("Author", |m| m.author.clone(), |m, v| m.author = v)
                .build(),
        )
        .unwrap();
    registry
}

fn compact() -> WriteOptions {
    WriteOptions::compact()
}

#[test]
fn test_board_round_trip() {
    let registry = registry();
    let board = Board {
        title: "Main".to_string(),
        tiles: vec![
            Box::new(new_tile()),
            Box::new(Tile {
                size: 2,
                column: 1,
                cached: 9,
            }),
        ],
        meta: None,
    };

    let xml = save(&registry, &board, None, &compact()).unwrap();
    assert_eq!(
        xml,
        r#"<Board Title="Main"><Tile Area="1"/><Tile Size="2" Column="1" Area="4"/></Board>"#
    );

    let loaded = load(&registry, &xml, &Stylesheet::new()).unwrap();
    let loaded = loaded.downcast_ref::<Board>().unwrap();
    assert_eq!(loaded.title, "Main");
    assert_eq!(loaded.tiles.len(), 2);
    let second = loaded.tiles[1].downcast_ref::<Tile>().unwrap();
    assert_eq!((second.size, second.column, second.cached), (2, 1, 0));
}

#[test]
fn test_unknown_attributes_are_ignored() {
    let registry = registry();
    let loaded = load(
        &registry,
        r#"<Tile Size="3" Flavor="mint" Cached="5"/>"#,
        &Stylesheet::new(),
    )
    .unwrap();
    let tile = loaded.downcast_ref::<Tile>().unwrap();
    assert_eq!(tile.size, 3);
    assert_eq!(tile.cached, 0);
}

#[test]
fn test_read_only_attribute_is_skipped_on_load() {
    let registry = registry();
    let loaded = load(&registry, r#"<Tile Area="81" Size="2"/>"#, &Stylesheet::new()).unwrap();
    assert_eq!(loaded.downcast_ref::<Tile>().unwrap().size, 2);
}

#[test]
fn test_obsolete_property_loads_but_is_not_written() {
    let registry = registry();
    let loaded = load(&registry, r#"<Tile Position="3"/>"#, &Stylesheet::new()).unwrap();
    assert_eq!(loaded.downcast_ref::<Tile>().unwrap().column, 3);

    let xml = save(&registry, loaded.as_ref(), None, &compact()).unwrap();
    assert_eq!(xml, r#"<Tile Column="3" Area="1"/>"#);
}

#[test]
fn test_conversion_error_names_property() {
    let registry = registry();
    let err = load(&registry, r#"<Tile Size="big"/>"#, &Stylesheet::new()).unwrap_err();
    match err {
        Error::Conversion {
            type_name,
            property,
            source,
        } => {
            assert_eq!((type_name, property), ("Tile", "Size"));
            assert!(matches!(source, ConversionError::InvalidNumber { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_implicit_child_without_container_role_fails() {
    let registry = registry();
    let err = load(&registry, "<Note><Tile/></Note>", &Stylesheet::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::NoContainerRole {
            container: "Note",
            child: "Tile",
        })
    ));
}

#[test]
fn test_implicit_child_of_wrong_kind_fails() {
    let registry = registry();
    let err = load(&registry, "<Board><Note/></Board>", &Stylesheet::new()).unwrap_err();
    assert!(matches!(
        err,
        Error::Resolution(ResolutionError::Misplaced {
            container: "Board",
            child: "Note",
            expected: "ITile",
        })
    ));
}

#[test]
fn test_unknown_tag_anywhere_fails_whole_load() {
    let registry = registry();
    let err = load(
        &registry,
        r#"<Board Title="x"><Tile/><Tiel/></Board>"#,
        &Stylesheet::new(),
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Could not resolve tag 'Tiel'");
    assert!(err.is_data_error());
}

#[test]
fn test_unmarked_object_property_is_simple() {
    let registry = registry();
    let desc = registry.descriptor("Board").unwrap();
    let simple: Vec<_> = registry.simple_properties(desc).map(|p| p.name()).collect();
    assert_eq!(simple, ["Title", "Meta"]);

    // Nothing to write while the property is empty.
    let empty = Board::default();
    assert_eq!(
        save(&registry, &empty, None, &compact()).unwrap(),
        "<Board/>"
    );

    let board = Board {
        meta: Some(Meta {
            author: "ada".to_string(),
        }),
        ..Board::default()
    };
    let err = save(&registry, &board, None, &compact()).unwrap_err();
    assert!(matches!(
        err,
        Error::Conversion {
            type_name: "Board",
            property: "Meta",
            source: ConversionError::Unsupported { type_name: "Meta" },
        }
    ));
}

#[test]
fn test_save_object_skips_children() {
    let registry = registry();
    let board = Board {
        title: "Solo".to_string(),
        tiles: vec![Box::new(new_tile())],
        meta: None,
    };
    let xml = save_object(&registry, &board, None, &compact()).unwrap();
    assert_eq!(xml, r#"<Board Title="Solo"/>"#);
}

#[test]
fn test_load_into_existing_object_appends() {
    let registry = registry();
    let mut board = Board::default();
    board.tiles.push(Box::new(new_tile()));
    load_into(
        &registry,
        &mut board,
        r#"<Board><Tile Size="4"/></Board>"#,
        &Stylesheet::new(),
    )
    .unwrap();
    assert_eq!(board.tiles.len(), 2);
}

#[test]
fn test_second_direct_child_property_rejected() {
    #[derive(Debug, Default)]
    struct Pair {
        left: Vec<Box<dyn Component>>,
        right: Vec<Box<dyn Component>>,
    }
    uilayout_core::component!(Pair => TypeInfo::new("Pair", Capabilities::empty()));

    let mut registry = registry();
    let err = registry
        .register(
            TypeBuilder::<Pair>::new(Pair::default)
                .polymorphic_list("Left", &TILE_KIND, |p| &p.left, |p, t| p.left.push(t))
                .polymorphic_list("Right", &TILE_KIND, |p| &p.right, |p, t| p.right.push(t))
                .build(),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RegistrationError::AmbiguousChildren {
            first: "Left",
            second: "Right",
            ..
        }
    ));
}
