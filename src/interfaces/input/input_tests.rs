use super::Input;
use crate::interfaces::InputHandle;

#[test]
fn test_input_yaml_full() {
    let yaml = r"
basis_conversion:
  lmax: 3
  monomial_indices: [0, 1, 4]
  print_matrices: true
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(input.basis_conversion.lmax, 3);
    assert_eq!(input.basis_conversion.monomial_indices, vec![0, 1, 4]);
    assert!(input.basis_conversion.print_matrices);
}

#[test]
fn test_input_yaml_defaults() {
    let yaml = r"
basis_conversion:
  monomial_indices: [2]
";
    let input: Input = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(input.basis_conversion.lmax, 2);
    assert!(!input.basis_conversion.print_matrices);
    assert!(input.handle().is_ok());
}

#[test]
fn test_input_yaml_file_round_trip() {
    let input = Input::default();
    let path = std::env::temp_dir().join("dopsh_input_round_trip");
    crate::io::write_dopsh_yaml(&path, &input).unwrap();
    let reparsed = Input::from_file(path.with_extension("yml")).unwrap();
    assert_eq!(
        reparsed.basis_conversion.monomial_indices,
        input.basis_conversion.monomial_indices
    );
    assert_eq!(reparsed.basis_conversion.lmax, input.basis_conversion.lmax);
}
