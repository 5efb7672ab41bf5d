//! Behaviour of triangular matrices as seen through their public interface.
use utmatrix::data::linear_algebra::error::LinearAlgebraError;
use utmatrix::data::linear_algebra::matrix::TriangularMatrix;
use utmatrix::data::linear_algebra::MAX_MATRIX_SIZE;

/// Two matrices of order 2 with the upper triangles `[3, 2; 3]` and `[5, 2; 5]`.
fn sum_operands() -> (TriangularMatrix<i32>, TriangularMatrix<i32>) {
    let mut m1 = TriangularMatrix::zeros(2).unwrap();
    let mut m2 = TriangularMatrix::zeros(2).unwrap();
    m1[0][0] = 3; m1[1][1] = 3; m1[0][1] = 2;
    m2[1][1] = 5; m2[0][0] = 5; m2[0][1] = 2;

    (m1, m2)
}

/// Matrices of order 3 and 2, partially filled.
fn mismatched_operands() -> (TriangularMatrix<i32>, TriangularMatrix<i32>) {
    let mut m1 = TriangularMatrix::zeros(3).unwrap();
    let mut m2 = TriangularMatrix::zeros(2).unwrap();
    m1[0][0] = 3; m1[1][1] = 3; m1[0][1] = 2;
    m2[1][1] = 5; m2[0][0] = 5; m2[0][1] = 2;

    (m1, m2)
}

#[test]
fn can_create_matrix_with_positive_length() {
    assert!(TriangularMatrix::<i32>::zeros(5).is_ok());
}

#[test]
fn cant_create_too_large_matrix() {
    assert_eq!(
        TriangularMatrix::<i32>::zeros(MAX_MATRIX_SIZE + 1),
        Err(LinearAlgebraError::InvalidSize { size: MAX_MATRIX_SIZE + 1, max: MAX_MATRIX_SIZE }),
    );
}

#[test]
fn cant_create_empty_matrix() {
    assert!(matches!(
        TriangularMatrix::<i32>::zeros(0),
        Err(LinearAlgebraError::InvalidSize { size: 0, .. }),
    ));
}

#[test]
fn copied_matrix_is_equal_to_source_one() {
    let m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let c = m.clone();

    assert_eq!(m, c);
}

#[test]
fn copied_matrix_has_its_own_memory() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let mut c = m.clone();

    c[1][1] = 5;
    assert_ne!(m, c);
    assert_eq!(m[1][1], 0);

    m[0][4] = 7;
    assert_eq!(c[0][4], 0);
}

#[test]
fn can_get_size() {
    let m = TriangularMatrix::<i32>::zeros(4).unwrap();

    assert_eq!(m.order(), 4);
}

#[test]
fn can_set_and_get_element() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();

    m[1][1] = 5;
    assert_eq!(m[1][1], 5);
}

#[test]
fn fails_when_set_element_with_negative_index() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let index = -1_isize as usize;

    assert!(matches!(m.set(index, 1, 5), Err(LinearAlgebraError::OutOfRange { .. })));
    assert!(matches!(m.set(1, index, 5), Err(LinearAlgebraError::OutOfRange { .. })));
    assert_eq!(m, TriangularMatrix::zeros(5).unwrap());
}

#[test]
fn fails_when_set_element_with_too_large_index() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();

    assert_eq!(
        m.set(5, 5, 5),
        Err(LinearAlgebraError::OutOfRange { index: 5, start: 0, end: 5 }),
    );
    assert_eq!(
        m.set(4, 5, 5),
        Err(LinearAlgebraError::OutOfRange { index: 5, start: 4, end: 5 }),
    );
}

#[test]
#[should_panic]
fn operator_panics_with_too_large_index() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();

    m[5][5] = 5;
}

#[test]
fn index_valid_exactly_on_and_above_diagonal() {
    let order = 4;
    let mut m = TriangularMatrix::<i32>::zeros(order).unwrap();

    for i in 0..=order {
        for j in 0..=order {
            let valid = i < order && i <= j && j < order;
            assert_eq!(m.get_mut(i, j).is_ok(), valid, "({}, {})", i, j);
        }
    }
}

#[test]
fn can_assign_matrix_to_itself() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    m[2][2] = 1;
    m[1][1] = 2;

    let copy = m.clone();
    m.assign(&copy);
    assert_eq!(m[2][2], 1);
    assert_eq!(m[1][1], 2);
}

#[test]
fn can_assign_matrices_of_equal_size() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let mut m2 = TriangularMatrix::<i32>::zeros(5).unwrap();
    m[2][2] = 1;
    m[1][1] = 2;

    m2.assign(&m);
    assert_eq!(m2[2][2], 1);
    assert_eq!(m2[1][1], 2);
}

#[test]
fn assign_changes_matrix_size() {
    let m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let mut m2 = TriangularMatrix::<i32>::zeros(10).unwrap();

    m2.assign(&m);
    assert_eq!(m2.order(), 5);
}

#[test]
fn can_assign_matrices_of_different_size() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let mut m2 = TriangularMatrix::<i32>::zeros(7).unwrap();
    m[2][2] = 1;
    m[1][1] = 2;

    m2.assign(&m);
    assert_eq!(m2[2][2], 1);
    assert_eq!(m2[1][1], 2);
    assert!(m2.get(5, 6).is_err());
}

#[test]
fn compare_equal_matrices_return_true() {
    let mut m = TriangularMatrix::<i32>::zeros(5).unwrap();
    let mut m2 = TriangularMatrix::<i32>::zeros(7).unwrap();
    m[2][2] = 1;
    m[1][1] = 2;

    m2.assign(&m);
    assert!(m2 == m);
}

#[test]
#[allow(clippy::eq_op)]
fn compare_matrix_with_itself_return_true() {
    let mut m = TriangularMatrix::<f64>::zeros(5).unwrap();
    assert!(m == m);

    m[3][4] = f64::NAN;
    assert!(m == m);
}

#[test]
fn matrices_with_different_size_are_not_equal() {
    let m1 = TriangularMatrix::<i32>::zeros(2).unwrap();
    let m2 = TriangularMatrix::<i32>::zeros(3).unwrap();

    assert!(m1 != m2);
}

#[test]
fn independently_built_matrices_compare_by_content() {
    let build = || {
        let mut m = TriangularMatrix::<i32>::zeros(3).unwrap();
        m[0][1] = 4;
        m[2][2] = -1;
        m
    };
    let m1 = build();
    let mut m2 = build();
    assert_eq!(m1, m2);

    m2[0][0] = 1;
    assert_ne!(m1, m2);
}

#[test]
fn can_add_matrices_with_equal_size() {
    let (m1, m2) = sum_operands();

    let mut m3 = TriangularMatrix::<i32>::zeros(3).unwrap();
    m3.assign(&(&m2 + &m1).unwrap());
    assert_eq!(m3.order(), 2);
    assert_eq!(m3[0][0], 8);
    assert_eq!(m3[1][1], 8);
    assert_eq!(m3[0][1], 4);
}

#[test]
fn cant_add_matrices_with_not_equal_size() {
    let (m1, m2) = mismatched_operands();
    let (before_1, before_2) = (m1.clone(), m2.clone());

    assert_eq!(m2.add(&m1), Err(LinearAlgebraError::SizeMismatch { left: 2, right: 3 }));
    assert_eq!(m1, before_1);
    assert_eq!(m2, before_2);
}

#[test]
fn can_subtract_matrices_with_equal_size() {
    let (m1, m2) = sum_operands();

    let m3 = (&m2 - &m1).unwrap();
    assert_eq!(m3[0][0], 2);
    assert_eq!(m3[1][1], 2);
    assert_eq!(m3[0][1], 0);
}

#[test]
fn cant_subtract_matrices_with_not_equal_size() {
    let (m1, m2) = mismatched_operands();

    assert!(matches!(m2.subtract(&m1), Err(LinearAlgebraError::SizeMismatch { .. })));
}

#[test]
fn cant_multiply_matrices_with_not_equal_size() {
    let (m1, m2) = mismatched_operands();

    assert!(matches!(&m2 * &m1, Err(LinearAlgebraError::SizeMismatch { .. })));
}

#[test]
fn multiply_matrices_with_equal_size() {
    let mut m1 = TriangularMatrix::<i32>::zeros(2).unwrap();
    let mut m2 = TriangularMatrix::<i32>::zeros(2).unwrap();
    m1[0][0] = 1; m1[1][1] = 2; m1[0][1] = 3;
    m2[0][0] = 1; m2[1][1] = 2; m2[0][1] = 3;

    let m3 = m1.multiply(&m2).unwrap();
    assert_eq!(m3[0][0], 1);
    assert_eq!(m3[1][1], 4);
    assert_eq!(m3[0][1], 9);
}

#[test]
fn float_arithmetic() {
    let mut m1 = TriangularMatrix::<f64>::zeros(2).unwrap();
    let mut m2 = TriangularMatrix::<f64>::zeros(2).unwrap();
    m1[0][0] = 0.5; m1[0][1] = 1.5; m1[1][1] = 2.;
    m2[0][0] = 2.; m2[0][1] = 0.25; m2[1][1] = 4.;

    let sum = (&m1 + &m2).unwrap();
    assert_eq!(sum.iter().map(|(_, _, &v)| v).collect::<Vec<_>>(), vec![2.5, 1.75, 6.]);

    let product = (&m1 * &m2).unwrap();
    assert_eq!(product.iter().map(|(_, _, &v)| v).collect::<Vec<_>>(), vec![1., 6.125, 8.]);
}

#[test]
fn printed_in_row_major_triangular_order() {
    let mut m = TriangularMatrix::<i32>::zeros(3).unwrap();
    for (i, j) in [(0, 0), (0, 1), (0, 2), (1, 1), (1, 2), (2, 2)] {
        m[i][j] = (i * 10 + j) as i32;
    }

    assert_eq!(
        m.iter().map(|(_, _, &v)| v).collect::<Vec<_>>(),
        vec![0, 1, 2, 11, 12, 22],
    );
    assert_eq!(m.to_string(), " 0  1  2\n   11 12\n      22\n");
}
