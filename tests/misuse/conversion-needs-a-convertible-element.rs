fn main() {
    let _words: Vec<String> = millefeuille::to(vec![1i32, 2, 3]); //~ ERROR E0277
}
