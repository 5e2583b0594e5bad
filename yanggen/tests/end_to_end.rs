//! End-to-end: schema tree through both walkers, checked against the
//! registries an output consumer would render from.

use yanggen::prelude::*;
use yanggen_ir::semantic_type_name;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn example_config() -> GeneratorConfig {
    GeneratorConfig {
        name: "example-plugin".to_string(),
        main: vec![ModuleConfig {
            name: "example".to_string(),
            prefix: "pfx".to_string(),
            disable: false,
            skip_prefix_mode: SkipPrefixMode::Default,
        }],
        other: vec!["ext-mod".to_string()],
        features: None,
    }
}

/// container settings { leaf mode (mode-t: off=0, on=1);
///                      container options { leaf verbose (boolean) };
///                      leaf-list search (string);
///                      list servers (key name) { leaf name; leaf port; leaf fallback-mode } }
fn example_tree() -> SchemaTree {
    let mut b = TreeBuilder::new(ModuleInfo::new("example"));
    let settings = b.container("settings", None).unwrap();

    let mode_t = TypeDesc::named_enumeration(
        "mode-t",
        vec![EnumLiteral::new("off", 0), EnumLiteral::new("on", 1)],
    );
    b.leaf("mode", Some(settings), mode_t.clone()).unwrap();

    let options = b.container("options", Some(settings)).unwrap();
    b.leaf(
        "verbose",
        Some(options),
        TypeDesc::primitive(BaseType::Boolean),
    )
    .unwrap();
    b.leaf_list(
        "search",
        Some(settings),
        TypeDesc::primitive(BaseType::String),
    )
    .unwrap();

    let servers = b.list("servers", Some(settings), &["name"]).unwrap();
    b.leaf(
        "name",
        Some(servers),
        TypeDesc::primitive(BaseType::String),
    )
    .unwrap();
    b.leaf(
        "port",
        Some(servers),
        TypeDesc::named("inet:port-number", BaseType::Uint16),
    )
    .unwrap();
    b.leaf("fallback-mode", Some(servers), mode_t).unwrap();

    b.finish()
}

#[test]
fn generates_renderable_registries() {
    init_tracing();

    let mut generator = Generator::new(example_config(), "out").unwrap();
    generator.add_module(example_tree()).unwrap();
    let artifacts = generator.generate_all().unwrap();
    let module = &artifacts[0];

    // API side: prefixes chain from the virtual root down.
    let settings = module.api.entry("/example:settings").unwrap();
    assert_eq!(settings.prefix, "pfx_settings");
    assert_eq!(settings.parent_prefix.as_deref(), Some("pfx"));
    let port = module
        .api
        .entry("/example:settings/servers/port")
        .unwrap();
    assert_eq!(port.prefix, "pfx_settings_servers_port");

    // Type side: struct, field kind and the shared enum definition.
    let st = module
        .types
        .structs()
        .iter()
        .find(|s| s.name == "pfx_settings")
        .unwrap();
    let mode = st.vars.iter().find(|v| v.name == "mode").unwrap();
    assert_eq!(mode.kind, VarKind::Enum);

    let en = module.types.enum_def("mode-t").unwrap();
    let values: Vec<_> = en
        .values
        .iter()
        .map(|v| (v.name.as_str(), v.position))
        .collect();
    assert_eq!(values, [("off", 0), ("on", 1)]);

    // Two leaves of the reusable type collapsed into one definition.
    assert_eq!(module.types.enums().len(), 1);

    // Every struct field that embeds another struct by value refers to a
    // struct declared earlier in the list (no forward declarations).
    let declared_at = |name: &str| {
        module
            .types
            .structs()
            .iter()
            .position(|s| s.name == name)
    };
    let mut embeddings = 0;
    for (idx, st) in module.types.structs().iter().enumerate() {
        for var in st.vars.iter().filter(|v| v.kind == VarKind::Struct) {
            let embedded = var.type_ref.strip_suffix("_t").unwrap();
            let pos = declared_at(embedded).unwrap();
            assert!(pos < idx, "{} must be declared before {}", embedded, st.name);
            embeddings += 1;
        }
    }
    assert_eq!(embeddings, 1); // settings embeds options

    // The two registries agree on type names through the semantic-name
    // rule: the API entry of the 'mode' leaf resolves to the same enum.
    let tree = example_tree();
    let mode_node = tree
        .roots()
        .next()
        .unwrap()
        .children()
        .find(|c| c.name() == "mode")
        .unwrap();
    let semantic = semantic_type_name(mode_node).unwrap();
    assert!(module.types.enum_def(&semantic).is_some());

    // Artifact names round-trip through the filename lookup.
    for entry in module.api.entries() {
        for artifact in entry.artifacts() {
            let resolved = module.api.resolve_artifact(&artifact).unwrap();
            assert_eq!(resolved.path, entry.path);
        }
    }
}
