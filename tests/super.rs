#[macro_use]
mod common;

#[cfg(test)]
mod super_expr {
    tests! {
        call_superclass_method in super_expr is OK
        "Fry until golden brown."
        "Pipe full of custard and coat with chocolate."
    }

    tests! {
        bound_statically in super_expr is OK
        "A.m"
    }

    tests! {
        undefined_method in super_expr is ERR
        "Runtime Error - Undefined property"
        "Lexeme - missing"
        "Position - (4, 11)"
    }

    tests! {
        out_of_class in super_expr is ERR
        "Resolve Error - Used `super` out of class"
        "Lexeme - super"
        "Position - (2, 3)"
    }

    tests! {
        without_superclass in super_expr is ERR
        "Resolve Error - Used `super` in class without superclass"
        "Lexeme - super"
        "Position - (3, 5)"
    }
}
