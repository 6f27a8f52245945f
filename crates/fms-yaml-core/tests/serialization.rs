use fms_yaml_core::types::*;
use pretty_assertions::assert_eq;

fn keys(value: &serde_yaml::Value) -> Vec<String> {
    value
        .as_mapping()
        .expect("expected a mapping")
        .keys()
        .map(|k| k.as_str().unwrap_or_default().to_string())
        .collect()
}

fn sample_var() -> VarEntry {
    VarEntry {
        variable: "temp".into(),
        longname: "potential temperature".into(),
        subparams: vec![
            SubParamGroup {
                index: 0,
                params: vec![
                    SubParam {
                        key: "units".into(),
                        value: "degC".into(),
                    },
                    SubParam {
                        key: "packing".into(),
                        value: "2".into(),
                    },
                ],
            },
            SubParamGroup {
                index: 1,
                params: vec![SubParam {
                    key: "zaxis".into(),
                    value: "none".into(),
                }],
            },
        ],
    }
}

#[test]
fn var_entry_key_order() {
    let value = serde_yaml::to_value(sample_var()).unwrap();
    assert_eq!(
        keys(&value),
        vec!["variable", "longname", "subparams0", "subparams1"]
    );
}

#[test]
fn subparam_groups_are_sequences_of_single_key_maps() {
    let value = serde_yaml::to_value(sample_var()).unwrap();
    let group = value["subparams0"].as_sequence().unwrap();
    assert_eq!(group.len(), 2);
    for item in group {
        assert_eq!(item.as_mapping().unwrap().len(), 1);
    }
    assert_eq!(keys(&group[0]), vec!["units"]);
    assert_eq!(keys(&group[1]), vec!["packing"]);
    assert_eq!(group[1]["packing"].as_str(), Some("2"));
}

#[test]
fn var_without_groups_has_only_required_keys() {
    let var = VarEntry {
        variable: "salt".into(),
        longname: fms_yaml_core::NULL_SENTINEL.into(),
        subparams: vec![],
    };
    let value = serde_yaml::to_value(var).unwrap();
    assert_eq!(keys(&value), vec!["variable", "longname"]);
    assert_eq!(value["longname"].as_str(), Some("fm_yaml_null"));
}

#[test]
fn table_root_key_and_entry_order() {
    let table = DiagTable {
        files: vec![FileEntry {
            field_type: "tracer".into(),
            modlist: vec![ModelEntry {
                model_type: "ocean_mod".into(),
                varlist: vec![sample_var()],
            }],
        }],
    };
    let value = serde_yaml::to_value(&table).unwrap();
    assert_eq!(keys(&value), vec!["diag_table"]);

    let file = &value["diag_table"][0];
    assert_eq!(keys(file), vec!["field_type", "modlist"]);
    assert_eq!(keys(&file["modlist"][0]), vec!["model_type", "varlist"]);
}

#[test]
fn empty_table_serializes_empty_sequence() {
    let yaml = serde_yaml::to_string(&DiagTable::default()).unwrap();
    assert_eq!(yaml.trim(), "diag_table: []");
}

#[test]
fn json_rendering_has_same_shape() {
    let json = serde_json::to_value(sample_var()).unwrap();
    assert_eq!(json["variable"], "temp");
    assert_eq!(json["subparams1"][0]["zaxis"], "none");
}
