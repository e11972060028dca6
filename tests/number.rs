#[macro_use]
mod common;

#[cfg(test)]
mod number {
    tests! {
        literals in number is OK
        "123"
        "987654"
        "0"
        "123.456"
        "-0.001"
    }

    tests! {
        division in number is OK
        "4"
        "inf"
        "NaN"
    }

    tests! {
        trailing_dot in number is ERR
        "Parse Error - Expected property name"
        "Lexeme - ;"
        "Position - (1, 11)"
    }
}
