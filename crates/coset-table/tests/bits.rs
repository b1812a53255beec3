use coset_math::Gf2;
use coset_table::{num2word, word2num};

#[test]
fn test_num2word_msb_first() {
    let w = num2word(0b110, 5);
    assert_eq!(w.shape(), (1, 5));
    assert_eq!(format!("{}", w), "[0 0 1 1 0]");
}

#[test]
fn test_num2word_truncates_high_bits() {
    assert_eq!(word2num(num2word(0b1_0101, 4).row(0).unwrap()), 0b0101);
}

#[test]
fn test_inverse_law() {
    for len in 0..=10usize {
        for n in 0..(1usize << len) {
            let w = num2word(n, len);
            assert_eq!(word2num(w.row(0).unwrap()), n);
            let back = num2word(word2num(w.row(0).unwrap()), len);
            assert_eq!(back, w);
        }
    }
}

#[test]
fn test_word2num_folds_left_to_right() {
    let row = [Gf2::ONE, Gf2::ZERO, Gf2::ONE, Gf2::ONE];
    assert_eq!(word2num(&row), 0b1011);
    assert_eq!(word2num(&[]), 0);
}
