//! Whether an order satisfies a restaurant's rules for special dishes and
//! the free service item.

use std::collections::HashMap;

use crate::templates::prelude::*;

pub struct RestaurantOrder;

static INFO: TemplateInfo = TemplateInfo {
    id: "17479",
    title: "Jeong restaurant",
    category: Category::Implementation,
    input: &[
        Field::int("a"),
        Field::int("b"),
        Field::int("c"),
        Field::word("normal").repeat("2 * a"),
        Field::word("special").repeat("2 * b"),
        Field::word("service").repeat("c"),
        Field::int("n"),
        Field::word("order").repeat("n"),
    ],
    output: &[Field::word("verdict")],
    constraints: &[
        "1 <= a <= 100, 0 <= b, c <= 100",
        "menu entries are `name price` with 1 <= price <= 1000000; services have no price",
        "names are unique across menus and at most 20 letters",
        "1 <= n <= 1000, every ordered name is on a menu",
        "special dishes need 20000 in normal dishes; a service needs 50000 in total and may be ordered once",
    ],
    samples: &[
        Sample {
            input: "2 1 1\nPizza 10000\nSteak 30000\nCake 40000\nCoke\n4\nPizza\nSteak\nCake\nCoke\n",
            output: "Okay\n",
        },
        Sample {
            input: "2 1 1\nPizza 10000\nSteak 30000\nCake 40000\nCoke\n2\nCake\nPizza\n",
            output: "No\n",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dish {
    Normal(u64),
    Special(u64),
    Service,
}

#[derive(Debug, Clone)]
pub struct Input {
    pub order: Vec<Dish>,
}

const SPECIAL_THRESHOLD: u64 = 20_000;
const SERVICE_THRESHOLD: u64 = 50_000;

fn add_dish<'a>(
    menu: &mut HashMap<&'a str, Dish>,
    field: &'static str,
    name: &'a str,
    dish: Dish,
) -> Result<(), InputError> {
    if name.len() > 20 {
        return Err(InputError::constraint(field, "name longer than 20 letters"));
    }
    match menu.insert(name, dish) {
        Some(_) => Err(InputError::constraint(field, format!("{name:?} is listed twice"))),
        None => Ok(()),
    }
}

impl Template for RestaurantOrder {
    type Input = Input;
    type Output = bool;

    fn info(&self) -> &'static TemplateInfo {
        &INFO
    }

    fn parse(&self, sc: &mut Scanner<'_>) -> Result<Input, InputError> {
        let a = sc.next_in("a", 1..=100usize)?;
        let b = sc.next_in("b", 0..=100usize)?;
        let c = sc.next_in("c", 0..=100usize)?;
        let mut menu = HashMap::new();
        for _ in 0..a {
            let name = sc.token("normal")?;
            let price = sc.next_in("normal", 1..=1_000_000)?;
            add_dish(&mut menu, "normal", name, Dish::Normal(price))?;
        }
        for _ in 0..b {
            let name = sc.token("special")?;
            let price = sc.next_in("special", 1..=1_000_000)?;
            add_dish(&mut menu, "special", name, Dish::Special(price))?;
        }
        for _ in 0..c {
            add_dish(&mut menu, "service", sc.token("service")?, Dish::Service)?;
        }
        let n = sc.next_in("n", 1..=1000usize)?;
        let order = (0..n)
            .map(|_| {
                let name = sc.token("order")?;
                menu.get(name)
                    .copied()
                    .ok_or_else(|| InputError::constraint("order", format!("{name:?} is not on the menu")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Input { order })
    }

    fn solve(&self, input: &Input) -> bool {
        let (mut normal, mut special, mut services) = (0u64, 0u64, 0usize);
        for dish in &input.order {
            match *dish {
                Dish::Normal(p) => normal += p,
                Dish::Special(p) => special += p,
                Dish::Service => services += 1,
            }
        }
        let specials_ok = special == 0 || normal >= SPECIAL_THRESHOLD;
        let service_ok = match services {
            0 => true,
            1 => normal + special >= SERVICE_THRESHOLD,
            _ => false,
        };
        specials_ok && service_ok
    }

    fn render(&self, output: &bool, out: &mut String) {
        push_line(out, [if *output { "Okay" } else { "No" }]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_services_are_refused() {
        let input = Input {
            order: vec![Dish::Normal(90_000), Dish::Service, Dish::Service],
        };
        assert!(!RestaurantOrder.solve(&input));
    }

    #[test]
    fn service_needs_total_spend() {
        let order = vec![Dish::Normal(10_000), Dish::Service];
        assert!(!RestaurantOrder.solve(&Input { order }));
        let order = vec![Dish::Normal(50_000), Dish::Service];
        assert!(RestaurantOrder.solve(&Input { order }));
    }
}
