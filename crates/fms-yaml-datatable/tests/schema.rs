use fms_yaml_datatable::{DataTableError, Validator, Violation};

fn validate(yaml: &str) -> Result<usize, DataTableError> {
    Validator::new().validate_str(yaml)
}

fn violation(yaml: &str) -> Violation {
    match validate(yaml) {
        Err(DataTableError::Entry { violation, .. }) => violation,
        other => panic!("expected an entry violation, got {other:?}"),
    }
}

#[test]
fn schema_valid_entry() {
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
  factor: 1
"#;
    assert_eq!(validate(yaml).unwrap(), 1);
}

#[test]
fn schema_full_entry_with_region() {
    let yaml = r#"
data_table:
- gridname: ICE
  fieldname_code: sic_obs
  fieldname_file: sic
  file_name: INPUT/hadisst_ice.data.nc
  interpol_method: bilinear
  factor: 0.01
  region_type: inside_region
  lat_start: -90.0
  lat_end: -60
  lon_start: 0
  lon_end: 360
- gridname: ATM
  fieldname_code: ozone
  fieldname_file: O3
  file_name: INPUT/ozone.nc
  interpol_method: bicubic
  factor: 1.0
"#;
    assert_eq!(validate(yaml).unwrap(), 2);
}

#[test]
fn schema_invalid_gridname() {
    let yaml = r#"
data_table:
- gridname: SEA
  fieldname_code: sst
  interpol_method: none
  factor: 1
"#;
    let v = violation(yaml);
    assert_eq!(v, Violation::InvalidGridname("SEA".into()));
    let message = v.to_string();
    assert!(message.contains("SEA"));
    assert!(message.contains(r#""OCN", "LND", "ATM", "ICE""#));
}

#[test]
fn schema_region_bounds() {
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  fieldname_file: sst
  interpol_method: bilinear
  factor: 1
  region_type: inside_region
  lat_start: 10
  lat_end: 5
  lon_start: 0
  lon_end: 10
"#;
    let v = violation(yaml);
    assert!(v.to_string().contains("lat_start is greater than lat_end"));
}

#[test]
fn schema_region_requires_all_bounds() {
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
  factor: 1
  region_type: outside_region
  lat_start: 0
  lat_end: 5
  lon_start: 0
"#;
    assert_eq!(violation(yaml), Violation::MissingBound("lon_end"));
}

#[test]
fn schema_empty_fieldname_file() {
    let yaml = r#"
data_table:
- gridname: LND
  fieldname_code: runoff
  fieldname_file: ""
  interpol_method: bilinear
  factor: 1
"#;
    assert_eq!(
        violation(yaml),
        Violation::InterpWithoutFile("bilinear".into())
    );
}

#[test]
fn schema_file_name_not_inherited_between_entries() {
    // The second entry omits fieldname_file; it must not see the first entry's value.
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  fieldname_file: sst_obs
  interpol_method: bilinear
  factor: 1
- gridname: OCN
  fieldname_code: sss
  interpol_method: none
  factor: 1
"#;
    assert_eq!(validate(yaml).unwrap(), 2);
}

#[test]
fn schema_fail_fast_reports_first_section() {
    let yaml = r#"
first:
- gridname: OCN
  fieldname_code: ""
  interpol_method: none
  factor: 1
second:
- gridname: SEA
"#;
    match validate(yaml) {
        Err(DataTableError::Entry {
            section,
            index,
            violation,
            ..
        }) => {
            assert_eq!(section, "first");
            assert_eq!(index, 0);
            assert_eq!(violation, Violation::EmptyFieldnameCode);
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn schema_missing_factor() {
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
"#;
    assert_eq!(violation(yaml), Violation::MissingKey("factor"));
}

#[test]
fn schema_bad_yaml() {
    assert!(matches!(
        validate("data_table: [unclosed"),
        Err(DataTableError::Yaml(_))
    ));
}

#[test]
fn schema_factor_checked_by_presence_only() {
    let quoted = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
  factor: "1"
"#;
    assert_eq!(validate(quoted).unwrap(), 1);

    let null = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
  factor:
"#;
    assert_eq!(validate(null).unwrap(), 1);
}

#[test]
fn schema_numeric_fieldname_code() {
    let yaml = r#"
data_table:
- gridname: ATM
  fieldname_code: 123
  interpol_method: none
  factor: 1
"#;
    assert_eq!(validate(yaml).unwrap(), 1);
}

#[test]
fn schema_non_numeric_bound_is_a_rule_violation() {
    let yaml = r#"
data_table:
- gridname: OCN
  fieldname_code: sst
  interpol_method: none
  factor: 1
  region_type: inside_region
  lat_start: 0
  lat_end: north
  lon_start: 0
  lon_end: 10
"#;
    match validate(yaml) {
        Err(DataTableError::Entry {
            rule, violation, ..
        }) => {
            assert_eq!(rule, "region");
            assert_eq!(
                violation,
                Violation::NonNumericBound {
                    name: "lat_end",
                    value: "north".into()
                }
            );
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
