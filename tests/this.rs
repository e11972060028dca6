#[macro_use]
mod common;

#[cfg(test)]
mod this_expr {
    tests! {
        in_method in this_expr is OK
        "<instance Foo>"
    }

    tests! {
        in_nested_function in this_expr is OK
        "<instance Thing>"
    }

    tests! {
        out_of_class in this_expr is ERR
        "Resolve Error - Used `this` out of class"
        "Lexeme - this"
        "Position - (1, 7)"
    }
}
