// Builds the 3x3 sample system, prints its pivoted factors and the solution
// from every solve path. Run with RUST_LOG=trace to see pivot swaps.

use bandsolve::linalg::{
    gaussian_elimination, gaussian_elimination_pivots, housetriang_solve, BandedLu, PivotedLu,
};
use bandsolve::{DynMatrix, DynVector, LinalgError};

fn fmt_vec(v: &DynVector<f64>) -> String {
    let inner: Vec<String> = v.iter().map(|x| format!("{x:.6}")).collect();
    format!("[{}]", inner.join(", "))
}

fn main() -> Result<(), LinalgError> {
    env_logger::init();

    let a = DynMatrix::from_nested(&[[1.0_f64, 1.0, 2.0], [2.0, 2.0, 1.0], [1.0, 2.0, 3.0]]);
    let b = DynVector::from_slice(&[9.0, 9.0, 14.0]);

    let lu = PivotedLu::new(&a)?;
    println!("P =\n{}\n", lu.p());
    println!("L =\n{}\n", lu.l());
    println!("U =\n{}\n", lu.u());
    println!("P·L·U =\n{}\n", lu.reconstruct());

    println!("gaussian_elimination        x = {}", fmt_vec(&gaussian_elimination(&a, &b)?));
    println!("gaussian_elimination_pivots x = {}", fmt_vec(&gaussian_elimination_pivots(&a, &b)?));
    println!("housetriang_solve           x = {}", fmt_vec(&housetriang_solve(&a, &b)?));

    match BandedLu::new(&a, 2) {
        Ok(lu) => println!("banded LU                   x = {}", fmt_vec(&lu.solve(&b)?)),
        Err(e) => println!("banded LU                   {e}"),
    }

    let tri = DynMatrix::from_fn(6, 6, |i, j| match i.abs_diff(j) {
        0 => 4.0,
        1 => -1.0,
        _ => 0.0,
    });
    let rhs = DynVector::from_slice(&[3.0, 2.0, 2.0, 2.0, 2.0, 3.0]);
    let x = BandedLu::new(&tri, 1)?.solve(&rhs)?;
    println!("tridiagonal banded LU       x = {}", fmt_vec(&x));

    Ok(())
}
