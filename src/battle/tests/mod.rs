mod common;


#[cfg(test)]
mod test_pp_use;

#[cfg(test)]
mod test_battle_loop;
