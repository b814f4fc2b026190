use numvec::*;

fn main() -> Result<(), Error> {
  env_logger::init();

  let mut v: Vector<i64> = Vector::new(5); // <0, 0, 0, 0, 0>
  v[1] = 23; // <0, 23, 0, 0, 0>
  v.set(-1, 45)?; // <0, 23, 0, 0, 45>
  println!("{}", v.get(4)?);
  let mut u = &v + &v; // <0, 46, 0, 0, 90>
  println!("{}", u);

  println!("--- Subtraction ---");
  u.set(3, 69)?;
  println!("{} {}", u, v);
  println!("{}", &u - &v);

  println!("--- Negation ---");
  println!("{}", u);
  println!("{}", -&u);

  println!("--- Right addition ---");
  let seq = [1, 2, 3, 4, 5];
  println!("{} {:?}", u, seq);
  println!("{}", &u + &seq);
  println!("{}", &seq + &u);

  println!("--- Scalar multiplication ---");
  println!("{} {} {}", u, 3, &u * 3);
  let uf: Vector<f64> = Vector::try_from_values(u.iter().copied())?;
  println!("{} {} {}", 3.5, uf, 3.5 * &uf);
  match u.try_mul("wesh") {
    Ok(product) => println!("wesh {} {}", u, product),
    Err(err) => println!("{}", err),
  }

  println!("--- Vector multiplication ---");
  println!("{} {} {}", u, v, &u * &v);
  println!("{} {} {}", v, u, &v * &u);
  Ok(())
}
