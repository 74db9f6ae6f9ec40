/// Integration tests for the prefix index built on the graph store
use graphtrie::trie::Vertex;
use graphtrie::{IndexConfig, PrefixIndex, PrefixMissPolicy, TrieError};
use std::io::Write;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

fn setup_index(words: &[&str]) -> anyhow::Result<PrefixIndex> {
    init_tracing();
    let mut index = PrefixIndex::new()?;
    for word in words {
        index.add_key(word)?;
    }
    Ok(index)
}

#[test]
fn test_prefix_lookup_scenarios() -> anyhow::Result<()> {
    let index = setup_index(&["a", "apple", "banana", "barbarian"])?;

    assert_eq!(index.get_keys_by_prefix("a")?, vec!["a", "apple"]);
    assert_eq!(index.get_keys_by_prefix("bar")?, vec!["barbarian"]);
    assert_eq!(index.get_keys_by_prefix("ban")?, vec!["banana"]);
    assert!(index.get_keys_by_prefix("xyz")?.is_empty());
    assert_eq!(index.key_count(), 4);
    Ok(())
}

#[test]
fn test_exact_prefix_is_reported_once() -> anyhow::Result<()> {
    let index = setup_index(&["apple"])?;

    assert_eq!(index.get_keys_by_prefix("apple")?, vec!["apple"]);
    assert!(index.get_keys_by_prefix("apples")?.is_empty());
    Ok(())
}

#[test]
fn test_shared_prefixes_share_vertices() -> anyhow::Result<()> {
    let index = setup_index(&["car", "cart", "care", "cat"])?;

    // root + c, a, r, t, e + t
    assert_eq!(index.vertex_count(), 7);
    assert_eq!(index.graph().edge_count(), 6);
    assert_eq!(index.get_keys_by_prefix("car")?, vec!["car", "cart", "care"]);
    assert_eq!(index.get_keys_by_prefix("ca")?, vec!["car", "cart", "care", "cat"]);
    Ok(())
}

#[test]
fn test_add_key_reports_novelty() -> anyhow::Result<()> {
    let mut index = setup_index(&[])?;

    assert!(index.add_key("tree")?);
    assert!(!index.add_key("tree")?);
    assert!(!index.add_key("TREE")?);
    assert!(index.add_key("tre")?);
    assert_eq!(index.key_count(), 2);
    Ok(())
}

#[test]
fn test_unicode_keys() -> anyhow::Result<()> {
    let index = setup_index(&["über", "übel", "umlaut"])?;

    assert_eq!(index.get_keys_by_prefix("üb")?, vec!["über", "übel"]);
    assert_eq!(index.get_keys_by_prefix("u")?, vec!["umlaut"]);
    Ok(())
}

#[test]
fn test_root_vertex_is_not_a_key() -> anyhow::Result<()> {
    let index = setup_index(&["#"])?;

    // '#' as a key character becomes a child of the root, never the root
    assert_eq!(index.get_keys_by_prefix("#")?, vec!["#"]);
    let roots = index
        .graph()
        .nodes()
        .filter(|node| node.properties == Vertex::new('#', false))
        .count();
    assert_eq!(roots, 1);
    Ok(())
}

#[test]
fn test_fallback_policy_from_yaml_file() -> anyhow::Result<()> {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "root_char: '$'")?;
    writeln!(file, "prefix_miss: ancestor_fallback")?;

    let config = IndexConfig::from_yaml_file(file.path())?;
    assert_eq!(config.root_char, '$');
    assert_eq!(config.prefix_miss, PrefixMissPolicy::AncestorFallback);

    let mut index = PrefixIndex::with_config(config)?;
    for word in ["a", "apple", "banana", "barbarian"] {
        index.add_key(word)?;
    }

    assert_eq!(index.get_keys_by_prefix("bax")?, vec!["banana", "barbarian"]);
    assert_eq!(index.get_keys_by_prefix("applesauce")?, vec!["apple"]);
    Ok(())
}

#[test]
fn test_fallback_keys_drop_unmatched_tail() -> anyhow::Result<()> {
    init_tracing();
    let config = IndexConfig::default().with_prefix_miss(PrefixMissPolicy::AncestorFallback);
    let mut index = PrefixIndex::with_config(config)?;
    for word in ["ap", "apple", "apricot"] {
        index.add_key(word)?;
    }

    let keys = index.get_keys_by_prefix("apx")?;
    assert_eq!(keys, vec!["ap", "apple", "apricot"]);
    for key in &keys {
        assert!(!key.contains('x'));
        assert!(index.contains_key(key)?);
    }

    // Miss on the very first character spells keys from the root
    assert_eq!(index.get_keys_by_prefix("zzz")?, vec!["ap", "apple", "apricot"]);
    Ok(())
}

#[test]
fn test_bad_config_file_is_rejected() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "root_char: 'z'")?;

    let config = IndexConfig::from_yaml_file(file.path());
    assert!(config.is_err());

    let missing = IndexConfig::from_yaml_file(file.path().with_extension("missing"));
    assert!(missing.is_err());

    let config = IndexConfig {
        root_char: '\n',
        ..IndexConfig::default()
    };
    assert!(matches!(
        PrefixIndex::with_config(config),
        Err(TrieError::Config(_))
    ));
    Ok(())
}

#[test]
fn test_vertex_serializes_with_wire_names() -> anyhow::Result<()> {
    let json = serde_json::to_value(Vertex::new('a', true))?;
    assert_eq!(json, serde_json::json!({ "char": "a", "isKey": true }));

    let back: Vertex = serde_json::from_value(json)?;
    assert_eq!(back, Vertex::new('a', true));
    Ok(())
}
